//! Node labels.
//!
//! A label is either a single piece of TikZ text or a sequence of lines that
//! are stacked inside the node.

use std::fmt;

/// Line break placed between the lines of a multi-line label.
pub const LINE_BREAK: &str = r" \\ ";

/// Text displayed inside a grid node.
///
/// # Examples
///
/// ```
/// use xdsm_core::label::Label;
///
/// assert_eq!(Label::from("x").to_string(), "x");
/// assert_eq!(Label::from(vec!["x", "y"]).to_string(), r"x \\ y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Lines(Vec<String>),
}

impl Label {
    /// Creates a multi-line label.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Label::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Wraps the label in an inline math environment.
    ///
    /// For a multi-line label every line is wrapped individually.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdsm_core::label::Label;
    ///
    /// assert_eq!(Label::from("x_0").math(), Label::from("$x_0$"));
    /// assert_eq!(
    ///     Label::lines(["x", "y"]).math(),
    ///     Label::lines(["$x$", "$y$"]),
    /// );
    /// ```
    pub fn math(&self) -> Self {
        match self {
            Label::Text(text) => Label::Text(format!("${text}$")),
            Label::Lines(lines) => Label::Lines(lines.iter().map(|l| format!("${l}$")).collect()),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Lines(lines) => f.write_str(&lines.join(LINE_BREAK)),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

impl From<Vec<String>> for Label {
    fn from(lines: Vec<String>) -> Self {
        Label::Lines(lines)
    }
}

impl From<Vec<&str>> for Label {
    fn from(lines: Vec<&str>) -> Self {
        Label::lines(lines)
    }
}
