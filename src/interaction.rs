use std::str::FromStr;

use crate::runtime::error::InteractionError;
use crate::runtime::value::WidgetKey;

/// Form field naming the button that submitted the page.
pub const CLICK_FIELD: &str = "__click";

/// A single user action between two execution passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Set { key: WidgetKey, value: String },
    Click { key: WidgetKey },
}

impl Interaction {
    pub fn set(key: impl Into<WidgetKey>, value: impl Into<String>) -> Self {
        Interaction::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn click(key: impl Into<WidgetKey>) -> Self {
        Interaction::Click { key: key.into() }
    }

    pub fn key(&self) -> &WidgetKey {
        match self {
            Interaction::Set { key, .. } | Interaction::Click { key } => key,
        }
    }

    /// Turns submitted form fields into interactions. Sets keep their order;
    /// the click, if any, is applied last.
    pub fn from_form<'a, I>(pairs: I) -> Vec<Interaction>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = Vec::new();
        let mut click = None;
        for (name, value) in pairs {
            if name == CLICK_FIELD {
                if !value.is_empty() {
                    click = Some(Interaction::click(value));
                }
            } else if !name.is_empty() {
                out.push(Interaction::set(name, value));
            }
        }
        out.extend(click);
        out
    }
}

impl FromStr for Interaction {
    type Err = InteractionError;

    /// `click:<key>` or `<key>=<value>`. Only the first `=` separates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = s.strip_prefix("click:") {
            if key.is_empty() {
                return Err(InteractionError::Malformed(s.to_string()));
            }
            return Ok(Interaction::click(key));
        }
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Interaction::set(key, value)),
            _ => Err(InteractionError::Malformed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_and_set() {
        assert_eq!("click:go".parse::<Interaction>().unwrap(), Interaction::click("go"));
        assert_eq!(
            "text_input:Message=a=b".parse::<Interaction>().unwrap(),
            Interaction::set("text_input:Message", "a=b")
        );
        assert_eq!("k=".parse::<Interaction>().unwrap(), Interaction::set("k", ""));
    }

    #[test]
    fn rejects_malformed() {
        for raw in ["", "click:", "=value", "no-separator"] {
            assert!(matches!(raw.parse::<Interaction>(), Err(InteractionError::Malformed(_))), "{raw}");
        }
    }

    #[test]
    fn form_click_goes_last() {
        let got = Interaction::from_form([("__click", "go"), ("a", "1"), ("b", "")]);
        assert_eq!(
            got,
            vec![Interaction::set("a", "1"), Interaction::set("b", ""), Interaction::click("go")]
        );
    }
}
