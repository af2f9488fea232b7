use once_cell::sync::Lazy;
use regex::Regex;

/// Matches self-introductions such as "my name is Avery", "I am Avery" or
/// "I'm Avery". The captured name is 1 to 41 characters of letters, hyphens,
/// apostrophes and spaces.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:my name is|i am|i'm)\s+([A-Za-z][A-Za-z' -]{0,40})")
        .expect("valid regex")
});

/// What the session knows about the person typing.
///
/// Name detection is a best-effort heuristic: "I am tired" will happily
/// record "tired". That noise is accepted; the note it produces merely nudges
/// the assistant to use a name, and a later introduction overwrites it.
///
/// # Examples
///
/// ```
/// use parlour::UserProfile;
///
/// let mut profile = UserProfile::default();
/// let note = profile.observe("Hi, my name is Avery!").unwrap();
/// assert!(note.contains("Avery"));
/// assert_eq!(profile.name(), Some("Avery"));
/// // Same name again, case-insensitively: no second note.
/// assert!(profile.observe("my name is avery").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    name: Option<String>,
}

impl UserProfile {
    /// The most recently detected name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Inspect one submission for a self-introduction.
    ///
    /// Returns a system note to append to the transcript when a new name is
    /// detected. A non-match, or a match equal (case-insensitively) to the
    /// stored name, returns `None`; neither is an error.
    pub fn observe(&mut self, text: &str) -> Option<String> {
        let caps = NAME_RE.captures(text)?;
        let name = caps[1].trim_end().to_string();
        if name.is_empty() {
            return None;
        }
        if self
            .name
            .as_deref()
            .is_some_and(|known| known.eq_ignore_ascii_case(&name))
        {
            return None;
        }
        tracing::debug!(%name, "detected user name");
        self.name = Some(name.clone());
        Some(format!(
            "The user's name is {name}. Address them by their name."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_my_name_is() {
        let mut profile = UserProfile::default();
        let note = profile.observe("My name is Avery").unwrap();
        assert_eq!(
            note,
            "The user's name is Avery. Address them by their name."
        );
        assert_eq!(profile.name(), Some("Avery"));
    }

    #[test]
    fn repeat_introduction_is_silent() {
        let mut profile = UserProfile::default();
        assert!(profile.observe("My name is Avery").is_some());
        assert!(profile.observe("my name is avery").is_none());
        assert_eq!(profile.name(), Some("Avery"));
    }

    #[test]
    fn new_name_overwrites_old_one() {
        let mut profile = UserProfile::default();
        profile.observe("I'm Avery");
        let note = profile.observe("actually I am Jordan").unwrap();
        assert!(note.contains("Jordan"));
        assert_eq!(profile.name(), Some("Jordan"));
    }

    #[test]
    fn hyphens_and_apostrophes_are_allowed() {
        let mut profile = UserProfile::default();
        profile.observe("my name is Jean-Luc O'Brien");
        assert_eq!(profile.name(), Some("Jean-Luc O'Brien"));
    }

    #[test]
    fn no_introduction_no_note() {
        let mut profile = UserProfile::default();
        assert!(profile.observe("what cleanser should I use?").is_none());
        assert_eq!(profile.name(), None);
    }

    #[test]
    fn captured_name_is_bounded() {
        let mut profile = UserProfile::default();
        let long = "x".repeat(200);
        profile.observe(&format!("I am {long}"));
        assert!(profile.name().unwrap().len() <= 41);
    }

    #[test]
    fn false_positives_are_accepted_noise() {
        let mut profile = UserProfile::default();
        assert!(profile.observe("I am tired today").is_some());
        assert_eq!(profile.name(), Some("tired today"));
    }
}
