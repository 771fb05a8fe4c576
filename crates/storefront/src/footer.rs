//! Footer: collapsible link sections and the newsletter signup form.

use std::collections::BTreeSet;

use serde::Serialize;

use dove_core::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const LINK_SECTIONS: &[LinkSection] = &[
    LinkSection {
        title: "Shop",
        links: &[
            FooterLink { name: "Women", href: "/women" },
            FooterLink { name: "Men", href: "/men" },
            FooterLink { name: "Accessories", href: "/accessories" },
            FooterLink { name: "Collections", href: "/collections" },
        ],
    },
    LinkSection {
        title: "Support",
        links: &[
            FooterLink { name: "FAQ", href: "/faq" },
            FooterLink { name: "Shipping", href: "/shipping" },
            FooterLink { name: "Returns", href: "/returns" },
            FooterLink { name: "Contact Us", href: "/contact" },
        ],
    },
    LinkSection {
        title: "About",
        links: &[
            FooterLink { name: "Our Story", href: "/about" },
            FooterLink { name: "Sustainability", href: "/sustainability" },
            FooterLink { name: "Careers", href: "/careers" },
        ],
    },
];

/// Newsletter signup form state.
#[derive(Debug, Clone, Default)]
pub struct Newsletter {
    draft: String,
    subscribers: BTreeSet<String>,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the email input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, email: impl Into<String>) {
        self.draft = email.into();
    }

    /// Submit the form: validates the draft, records the address and clears
    /// the input. On error the draft is kept so the shopper can fix it.
    pub fn submit(&mut self) -> DomainResult<String> {
        let email = normalize_email(&self.draft)?;
        if !self.subscribers.insert(email.clone()) {
            return Err(DomainError::conflict(format!("{email} is already subscribed")));
        }
        tracing::info!(subscribers = self.subscribers.len(), "newsletter subscription");
        self.draft.clear();
        Ok(email)
    }

    pub fn is_subscribed(&self, email: &str) -> bool {
        normalize_email(email).is_ok_and(|email| self.subscribers.contains(&email))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Trim and lowercase an address, rejecting anything that is not
/// `local@domain.tld`-shaped.
fn normalize_email(raw: &str) -> DomainResult<String> {
    let email = raw.trim().to_lowercase();
    let invalid = || DomainError::validation(format!("invalid email address {raw:?}"));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(email)
}

/// Footer state: which collapsible section is open (mobile) and the signup form.
#[derive(Debug, Clone, Default)]
pub struct FooterState {
    open_section: Option<&'static str>,
    pub newsletter: Newsletter,
}

impl FooterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &'static [LinkSection] {
        LINK_SECTIONS
    }

    pub fn open_section(&self) -> Option<&'static str> {
        self.open_section
    }

    /// Open `title`, or close it if it is already open. At most one section
    /// is open at a time.
    pub fn toggle_section(&mut self, title: &str) -> DomainResult<()> {
        let section = LINK_SECTIONS
            .iter()
            .find(|section| section.title == title)
            .ok_or_else(|| DomainError::not_found(format!("footer section {title:?}")))?;

        self.open_section = match self.open_section {
            Some(open) if open == section.title => None,
            _ => Some(section.title),
        };
        Ok(())
    }
}
