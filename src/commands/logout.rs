use super::*;

pub(super) fn cmd_logout(json_mode: bool) -> Result<()> {
    let removed = AuthStore::open()?.clear()?;

    if json_mode {
        println!("{}", json!({ "command": "logout", "removed": removed }));
    } else if removed {
        println!("\n  {} Signed out\n", "OK".green().bold());
    } else {
        println!("\n  {} No active session\n", "INFO".yellow());
    }

    Ok(())
}
