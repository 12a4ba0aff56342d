// Outbound links.
// Resolves link targets from the catalog and hands them to the system opener.

use std::process::{Command, Stdio};
use std::thread;

use crate::catalog::{PersonalInfo, Socials};
use crate::error::{DevfolioError, Result};

/// Social profile shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    GitHub,
    LinkedIn,
    Codeforces,
    LeetCode,
    WhatsApp,
}

impl Social {
    pub const ALL: [Social; 5] = [
        Social::GitHub,
        Social::LinkedIn,
        Social::Codeforces,
        Social::LeetCode,
        Social::WhatsApp,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Social::GitHub => "GitHub",
            Social::LinkedIn => "LinkedIn",
            Social::Codeforces => "Codeforces",
            Social::LeetCode => "LeetCode",
            Social::WhatsApp => "WhatsApp",
        }
    }

    /// Shortcut key that follows this profile.
    pub fn key(&self) -> char {
        match self {
            Social::GitHub => 'G',
            Social::LinkedIn => 'L',
            Social::Codeforces => 'C',
            Social::LeetCode => 'T',
            Social::WhatsApp => 'W',
        }
    }

    pub fn from_key(key: char) -> Option<Social> {
        Social::ALL.into_iter().find(|social| social.key() == key)
    }

    /// Configured profile URL, if any.
    pub fn profile<'a>(&self, socials: &'a Socials) -> Option<&'a str> {
        let url = match self {
            Social::GitHub => &socials.github,
            Social::LinkedIn => &socials.linkedin,
            Social::Codeforces => &socials.codeforces,
            Social::LeetCode => &socials.leetcode,
            Social::WhatsApp => &socials.whatsapp,
        };
        url.as_deref()
    }
}

/// A fire-and-forget navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Resume,
    Mail,
    Social(Social),
    External(String),
}

impl Link {
    pub fn label(&self) -> String {
        match self {
            Link::Resume => "resume".to_string(),
            Link::Mail => "mail composer".to_string(),
            Link::Social(social) => social.title().to_string(),
            Link::External(url) => url.clone(),
        }
    }

    /// Resolve the URL for this link. `None` if the catalog has no target.
    pub fn url(&self, personal: &PersonalInfo) -> Option<String> {
        match self {
            Link::Resume => personal.resume_url.clone(),
            Link::Mail => Some(mail_composer_url(&personal.email)),
            Link::Social(social) => social.profile(&personal.socials).map(str::to_string),
            Link::External(url) => Some(url.clone()),
        }
    }
}

/// Web mail compose URL addressed to `email`.
pub fn mail_composer_url(email: &str) -> String {
    let address = email.strip_prefix("mailto:").unwrap_or(email);
    format!("https://mail.google.com/mail/?view=cm&fs=1&to={}", address)
}

/// Opens URLs outside the application.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler.
///
/// The handler is reaped on a background thread so it never lingers as a zombie.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        };

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        };

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| DevfolioError::LinkOpen {
                url: url.to_string(),
                source,
            })?;

        thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::warn!(error = %e, "failed to reap link opener");
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content;

    #[test]
    fn test_mail_composer_url_strips_mailto() {
        assert_eq!(
            mail_composer_url("mailto:me@example.com"),
            "https://mail.google.com/mail/?view=cm&fs=1&to=me@example.com"
        );
        assert_eq!(
            mail_composer_url("me@example.com"),
            "https://mail.google.com/mail/?view=cm&fs=1&to=me@example.com"
        );
    }

    #[test]
    fn test_resolve_links() {
        let mut personal = content::builtin().personal;
        personal.socials.whatsapp = None;
        personal.resume_url = Some("https://example.com/cv".to_string());

        assert_eq!(
            Link::Resume.url(&personal).as_deref(),
            Some("https://example.com/cv")
        );
        assert!(Link::Social(Social::WhatsApp).url(&personal).is_none());
        assert_eq!(
            Link::External("https://x.example".to_string())
                .url(&personal)
                .as_deref(),
            Some("https://x.example")
        );
    }

    #[test]
    fn test_social_keys_round_trip() {
        for social in Social::ALL {
            assert_eq!(Social::from_key(social.key()), Some(social));
        }
        assert_eq!(Social::from_key('q'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Link::Social(Social::LeetCode).label(), "LeetCode");
        assert_eq!(Link::Mail.label(), "mail composer");
    }
}
