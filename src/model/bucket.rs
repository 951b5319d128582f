use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBucket {
    Elite,
    VeryHigh,
    High,
    Mid,
    Low,
}

impl PercentileBucket {
    pub fn name(self) -> &'static str {
        match self {
            PercentileBucket::Elite => "elite",
            PercentileBucket::VeryHigh => "very_high",
            PercentileBucket::High => "high",
            PercentileBucket::Mid => "mid",
            PercentileBucket::Low => "low",
        }
    }

    pub fn style(self) -> StyleDescriptor {
        match self {
            PercentileBucket::Elite => StyleDescriptor::new("blue", "white"),
            PercentileBucket::VeryHigh => StyleDescriptor::new("dark-green", "dark-text"),
            PercentileBucket::High => StyleDescriptor::new("light-green", "dark-text"),
            PercentileBucket::Mid => StyleDescriptor::new("neutral", "white"),
            PercentileBucket::Low => StyleDescriptor::new("red", "dark-text"),
        }
    }
}

impl fmt::Display for PercentileBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub background: &'static str,
    pub text: &'static str,
}

impl StyleDescriptor {
    const fn new(background: &'static str, text: &'static str) -> Self {
        Self { background, text }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.background, self.text)
    }

    pub fn css_classes(&self) -> String {
        format!("bg-{} text-{}", self.background, self.text)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bucket.rs"]
mod tests;
