use crate::commands::{CmdMessage, CmdResult};
use crate::config::TallyConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowUser,
    SetUser(String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TallyConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowUser => {
            let shown = config.default_user.as_deref().unwrap_or("(unset)");
            result.add_message(CmdMessage::info(format!("user = {shown}")));
        }
        ConfigAction::SetUser(username) => {
            let username = username.trim();
            if username.is_empty() {
                return Ok(CmdResult::error("Username must not be empty."));
            }
            config.default_user = Some(username.to_string());
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("Default user set to {username}.")));
        }
    }

    Ok(result)
}
