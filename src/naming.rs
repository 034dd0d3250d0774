/// File extensions the picker knows how to stage.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["png", "gif"];

/// The three components of an emoji file name: `<group>.<label>.<extension>`.
///
/// Case is preserved; comparisons against a search term happen elsewhere
/// on case-folded copies.
///
/// # Examples
///
/// ```
/// use emojipick::naming::EmojiName;
///
/// let name = EmojiName::parse("guildA.smile.png").unwrap();
/// assert_eq!(name.group, "guildA");
/// assert_eq!(name.label, "smile");
/// assert_eq!(name.tags(), "smile,guildA,png");
/// assert!(EmojiName::parse("smile.png").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiName {
    pub group: String,
    pub label: String,
    pub extension: String,
}

impl EmojiName {
    /// Parse a bare file name. Returns `None` for anything that is not
    /// exactly three non-empty dot-separated segments ending in a
    /// recognized extension.
    pub fn parse(file_name: &str) -> Option<Self> {
        let mut parts = file_name.split('.');
        let group = parts.next()?;
        let label = parts.next()?;
        let extension = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        if group.is_empty()
            || label.is_empty()
            || !RECOGNIZED_EXTENSIONS.contains(&extension)
        {
            return None;
        }
        Some(Self {
            group: group.to_string(),
            label: label.to_string(),
            extension: extension.to_string(),
        })
    }

    /// Tag string handed to the host verbatim: `label,group,extension`.
    pub fn tags(&self) -> String {
        format!("{},{},{}", self.label, self.group, self.extension)
    }

    pub fn mime_type(&self) -> String {
        format!("image/{}", self.extension)
    }
}

impl std::fmt::Display for EmojiName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.group, self.label, self.extension)
    }
}
