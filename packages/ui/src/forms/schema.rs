//! # Declarative form schemas
//!
//! Every entity form is a [`FormSchema`]: a list of [`FormSection`]s holding
//! [`FieldSpec`]s. A field names its key in [`FormValues`], how it renders
//! ([`FieldKind`]), and the [`Rule`]s checked on submit. Schemas are plain
//! `const` data; [`EntityForm`](super::EntityForm) renders any of them.
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | [`Rule::Required`] | the value is non-empty after trimming |
//! | [`Rule::Integer`] | empty, or a whole non-negative number |
//! | [`Rule::Email`] | empty, or shaped like `local@domain.tld` |
//! | [`Rule::Positive`] | a number strictly greater than zero |
//!
//! Only the first failing rule of a field is reported. Fields hidden by
//! their [`ShownWhen`] condition are neither rendered nor validated.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    TextArea,
    Select,
    ReadOnly,
}

impl FieldKind {
    /// The `type` attribute for `input`-rendered kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Integer(&'static str),
    Email(&'static str),
    Positive(&'static str),
}

impl Rule {
    /// `Err(message)` when `value` breaks the rule.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let trimmed = value.trim();
        let ok = match self {
            Rule::Required(_) => !trimmed.is_empty(),
            Rule::Integer(_) => trimmed.is_empty() || trimmed.parse::<u32>().is_ok(),
            Rule::Email(_) => trimmed.is_empty() || looks_like_email(trimmed),
            Rule::Positive(_) => trimmed
                .parse::<f64>()
                .map(|n| n.is_finite() && n > 0.0)
                .unwrap_or(false),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(m) | Rule::Integer(m) | Rule::Email(m) | Rule::Positive(m) => m,
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

/// Visibility condition: show the field only while `key` holds `equals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShownWhen {
    pub key: &'static str,
    pub equals: &'static str,
}

/// One input of a form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
    pub shown_when: Option<ShownWhen>,
    /// Fixed `(value, label)` options for selects whose choices never change.
    pub choices: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            placeholder: label,
            kind,
            rules: &[],
            shown_when: None,
            choices: &[],
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    pub const fn rules(self, rules: &'static [Rule]) -> Self {
        Self { rules, ..self }
    }

    pub const fn shown_when(self, key: &'static str, equals: &'static str) -> Self {
        Self {
            shown_when: Some(ShownWhen { key, equals }),
            ..self
        }
    }

    pub const fn choices(self, choices: &'static [(&'static str, &'static str)]) -> Self {
        Self { choices, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormSection {
    pub heading: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormSchema {
    pub sections: &'static [FormSection],
}

impl FormSchema {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|field| field.key == key)
    }

    pub fn is_visible(&self, field: &FieldSpec, values: &FormValues) -> bool {
        match field.shown_when {
            Some(cond) => values.get(cond.key) == cond.equals,
            None => true,
        }
    }

    /// First failing rule per visible field. Empty when the form may submit.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in self.fields() {
            if !self.is_visible(field, values) {
                continue;
            }
            let value = values.get(field.key);
            if let Some(message) = field.rules.iter().find_map(|rule| rule.check(value).err()) {
                errors.insert(field.key, message.to_string());
            }
        }
        errors
    }
}

/// Raw form state, one string per field key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Inline error messages keyed by field.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options supplied at render time, keyed by field (e.g. the client list).
pub type SelectOptions = BTreeMap<&'static str, Vec<SelectOption>>;
