use serde::{Deserialize, Serialize};

/// Login state of the visitor. Passed into every view that depends on it;
/// there is no server-side session store behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub logged_in: bool,
}

impl Session {
    pub fn guest() -> Self {
        Self { logged_in: false }
    }

    pub fn member() -> Self {
        Self { logged_in: true }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// `None` for actions that only change the session, like logging out.
    pub href: Option<&'static str>,
}

impl NavLink {
    const fn link(label: &'static str, href: &'static str) -> Self {
        Self { label, href: Some(href) }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub account: Vec<NavLink>,
    pub logged_in: bool,
}

impl HeaderView {
    pub fn for_session(session: &Session) -> Self {
        let links = vec![
            NavLink::link("Home", "/"),
            NavLink::link("Routes", "/routes"),
            NavLink::link("My Tickets", "/my-tickets"),
            NavLink::link("Contact Us", "/contact"),
        ];

        let account = if session.logged_in {
            vec![
                NavLink::link("My Account", "/my-account"),
                NavLink { label: "Logout", href: None },
            ]
        } else {
            vec![NavLink::link("Login", "/login"), NavLink::link("Register", "/register")]
        };

        Self {
            brand: "BusTracker",
            links,
            account,
            logged_in: session.logged_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_header() {
        let header = HeaderView::for_session(&Session::guest());
        assert_eq!(header.links.len(), 4);
        let labels: Vec<_> = header.account.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Login", "Register"]);
    }

    #[test]
    fn test_member_header() {
        let header = HeaderView::for_session(&Session::member());
        assert!(header.logged_in);
        assert_eq!(header.account[0].href, Some("/my-account"));
        assert_eq!(header.account[1], NavLink { label: "Logout", href: None });
    }

    #[test]
    fn test_session_defaults_to_guest() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::guest());
    }
}
