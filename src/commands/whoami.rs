use super::*;

pub(super) fn cmd_whoami(json_mode: bool) -> Result<()> {
    let session = AuthStore::open()?.load()?;

    if json_mode {
        match &session {
            Some(s) => println!(
                "{}",
                json!({
                    "command": "whoami",
                    "signed_in": true,
                    "email": s.user.email,
                    "name": s.user.name,
                    "github_username": s.user.github_username,
                })
            ),
            None => println!("{}", json!({ "command": "whoami", "signed_in": false })),
        }
        return Ok(());
    }

    match session {
        Some(s) => {
            println!("\n  Signed in as {}", s.user.email.cyan().bold());
            if let Some(name) = &s.user.name {
                println!("  Name: {}", name);
            }
            if let Some(github) = &s.user.github_username {
                println!("  GitHub: {}", github.dimmed());
            }
            println!();
        }
        None => {
            println!(
                "\n  {} Not signed in. Run {} first.\n",
                "INFO".yellow(),
                "vibecheck login".cyan()
            );
        }
    }

    Ok(())
}
