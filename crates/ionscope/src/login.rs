//! Credential resolution and login flows.
//!
//! The full chain (interactive-capable binary):
//! explicit CLI email/password > settings-file token > settings-file
//! email/password > `X_AUTH_TOKEN` > `AUTH_TOKEN` > interactive prompt.
//! The token-only binary uses just the token steps and fails without one.

use dialoguer::Input;
use secrecy::SecretString;
use tracing::debug;

use ionscope_api::ApiSession;

use crate::config::Settings;
use crate::error::CliError;

/// How the session should be authenticated after resolution.
#[derive(Debug)]
pub enum ResolvedCredentials {
    /// A static token from the settings file or environment.
    Token(SecretString),
    /// Email/password login; missing parts are prompted for.
    Login {
        email: Option<String>,
        password: Option<SecretString>,
    },
}

/// Read the token environment variables, `X_AUTH_TOKEN` first.
pub fn env_token() -> Option<SecretString> {
    std::env::var("X_AUTH_TOKEN")
        .or_else(|_| std::env::var("AUTH_TOKEN"))
        .ok()
        .map(SecretString::from)
}

/// Token-only resolution: settings file, then the environment.
pub fn resolve_token(settings: &Settings, env_token: Option<SecretString>) -> Option<SecretString> {
    settings
        .auth_token
        .clone()
        .map(SecretString::from)
        .or(env_token)
}

/// Full credential chain for the interactive-capable binary.
///
/// Explicit CLI credentials always win and force the login path, even
/// when a token is also configured. An empty resolution falls through
/// to the interactive prompt (`Login` with both parts absent).
pub fn resolve_credentials(
    cli_email: Option<String>,
    cli_password: Option<SecretString>,
    settings: &Settings,
    env_token: Option<SecretString>,
) -> ResolvedCredentials {
    if cli_email.is_some() || cli_password.is_some() {
        return ResolvedCredentials::Login {
            email: cli_email.or_else(|| settings.email.clone()),
            password: cli_password
                .or_else(|| settings.password.clone().map(SecretString::from)),
        };
    }

    if let Some(token) = settings.auth_token.clone() {
        return ResolvedCredentials::Token(SecretString::from(token));
    }

    if settings.email.is_some() && settings.password.is_some() {
        return ResolvedCredentials::Login {
            email: settings.email.clone(),
            password: settings.password.clone().map(SecretString::from),
        };
    }

    if let Some(token) = env_token {
        return ResolvedCredentials::Token(token);
    }

    ResolvedCredentials::Login {
        email: None,
        password: None,
    }
}

/// Authenticate the session with resolved credentials.
///
/// The login path prompts for missing parts and retries on rejected
/// credentials, clearing one-shot values after the first failure so the
/// operator is re-prompted. Token rejection is terminal.
pub async fn establish_session(
    session: &ApiSession,
    credentials: ResolvedCredentials,
) -> Result<(), CliError> {
    match credentials {
        ResolvedCredentials::Token(token) => {
            debug!("authenticating with token");
            session.login_with_token(token).await?;
            Ok(())
        }
        ResolvedCredentials::Login {
            mut email,
            mut password,
        } => loop {
            let user = match email.take() {
                Some(e) => e,
                None => Input::new().with_prompt("login email").interact_text()?,
            };
            let pass = match password.take() {
                Some(p) => p,
                None => SecretString::from(rpassword::prompt_password("password: ")?),
            };

            match session.login_with_credentials(&user, &pass).await {
                Ok(()) => return Ok(()),
                Err(e) if e.is_auth_failure() => {
                    eprintln!("Login failed, please retry.");
                }
                Err(e) => return Err(e.into()),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn settings(token: Option<&str>, email: Option<&str>, password: Option<&str>) -> Settings {
        Settings {
            controller: None,
            auth_token: token.map(Into::into),
            email: email.map(Into::into),
            password: password.map(Into::into),
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[test]
    fn cli_credentials_beat_a_configured_token() {
        let resolved = resolve_credentials(
            Some("ops@example.com".into()),
            Some(secret("pw")),
            &settings(Some("tok"), None, None),
            Some(secret("env-tok")),
        );

        match resolved {
            ResolvedCredentials::Login { email, password } => {
                assert_eq!(email.as_deref(), Some("ops@example.com"));
                assert!(password.is_some());
            }
            other => panic!("expected login path, got {other:?}"),
        }
    }

    #[test]
    fn settings_token_beats_settings_login_and_env() {
        let resolved = resolve_credentials(
            None,
            None,
            &settings(Some("file-tok"), Some("a@b"), Some("pw")),
            Some(secret("env-tok")),
        );

        match resolved {
            ResolvedCredentials::Token(t) => assert_eq!(t.expose_secret(), "file-tok"),
            other => panic!("expected token, got {other:?}"),
        }
    }

    #[test]
    fn settings_login_beats_env_token() {
        let resolved = resolve_credentials(
            None,
            None,
            &settings(None, Some("a@b"), Some("pw")),
            Some(secret("env-tok")),
        );
        assert!(matches!(
            resolved,
            ResolvedCredentials::Login { email: Some(_), .. }
        ));
    }

    #[test]
    fn env_token_is_the_last_non_interactive_step() {
        let resolved =
            resolve_credentials(None, None, &settings(None, None, None), Some(secret("env")));
        assert!(matches!(resolved, ResolvedCredentials::Token(_)));
    }

    #[test]
    fn empty_chain_falls_through_to_interactive() {
        let resolved = resolve_credentials(None, None, &settings(None, None, None), None);
        assert!(matches!(
            resolved,
            ResolvedCredentials::Login {
                email: None,
                password: None,
            }
        ));
    }

    #[test]
    fn token_only_resolution_prefers_the_settings_file() {
        let token = resolve_token(&settings(Some("file-tok"), None, None), Some(secret("env")));
        assert_eq!(token.map(|t| t.expose_secret().to_owned()).as_deref(), Some("file-tok"));

        let token = resolve_token(&settings(None, None, None), Some(secret("env")));
        assert_eq!(token.map(|t| t.expose_secret().to_owned()).as_deref(), Some("env"));

        assert!(resolve_token(&settings(None, None, None), None).is_none());
    }
}
