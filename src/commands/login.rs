use super::*;

use dialoguer::{theme::ColorfulTheme, Input, Password};

pub(super) fn cmd_login(api_url: Option<&str>, email: Option<&str>, json_mode: bool) -> Result<()> {
    let theme = ColorfulTheme::default();
    let email = match email {
        Some(e) => e.to_string(),
        None => Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };
    let password: String = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let client = ApiClient::new(&effective_api_url(api_url)?, None)?;
    let response = client.login(&email, &password)?;
    let session = Session {
        access_token: response.access_token,
        user: response.user,
    };
    AuthStore::open()?.save(&session)?;

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "login",
                "email": session.user.email,
                "name": session.user.name,
            })
        );
    } else {
        println!(
            "\n  {} Signed in as {}\n",
            "OK".green().bold(),
            session.user.email.cyan()
        );
    }

    Ok(())
}
