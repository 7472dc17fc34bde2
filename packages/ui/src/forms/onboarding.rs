//! Registration, login and email-validation forms.

use api::{Credentials, RegisterRequest};

use super::schema::{FieldKind, FieldSpec, FormSchema, FormSection, FormValues, Rule};

const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Email).rules(&[
    Rule::Required("Email is required"),
    Rule::Email("Invalid email address"),
]);

const PASSWORD: FieldSpec = FieldSpec::new("password", "Password", FieldKind::Password)
    .rules(&[Rule::Required("Password is required")]);

pub const REGISTER_FORM: FormSchema = FormSchema {
    sections: &[FormSection {
        heading: None,
        fields: &[
            FieldSpec::new("firstName", "First Name", FieldKind::Text)
                .rules(&[Rule::Required("First name is required")]),
            FieldSpec::new("lastName", "Last Name", FieldKind::Text)
                .rules(&[Rule::Required("Last name is required")]),
            EMAIL,
            PASSWORD,
        ],
    }],
};

pub const LOGIN_FORM: FormSchema = FormSchema {
    sections: &[FormSection {
        heading: None,
        fields: &[EMAIL, PASSWORD],
    }],
};

pub const VALIDATE_FORM: FormSchema = FormSchema {
    sections: &[FormSection {
        heading: None,
        fields: &[FieldSpec::new("code", "Validation Code", FieldKind::Text)
            .rules(&[Rule::Required("Validation code is required")])],
    }],
};

pub fn register_request(values: &FormValues) -> RegisterRequest {
    RegisterRequest {
        first_name: values.get("firstName").to_string(),
        last_name: values.get("lastName").to_string(),
        email: values.get("email").to_string(),
        password: values.get("password").to_string(),
    }
}

pub fn credentials(values: &FormValues) -> Credentials {
    Credentials {
        email: values.get("email").to_string(),
        password: values.get("password").to_string(),
    }
}

pub fn validation_code(values: &FormValues) -> String {
    values.get("code").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_everything() {
        let errors = REGISTER_FORM.validate(&FormValues::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("firstName").map(String::as_str), Some("First name is required"));
        assert_eq!(errors.get("password").map(String::as_str), Some("Password is required"));
    }

    #[test]
    fn test_login_checks_email_shape() {
        let values = FormValues::new()
            .with("email", "ana")
            .with("password", "s3cret");
        let errors = LOGIN_FORM.validate(&values);
        assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email address"));

        let values = values.with("email", "ana@bildy.es");
        assert!(LOGIN_FORM.validate(&values).is_empty());
        assert_eq!(credentials(&values).email, "ana@bildy.es");
    }

    #[test]
    fn test_validation_code() {
        let errors = VALIDATE_FORM.validate(&FormValues::new().with("code", " "));
        assert_eq!(errors.get("code").map(String::as_str), Some("Validation code is required"));
        assert_eq!(validation_code(&FormValues::new().with("code", "123456")), "123456");
    }

    #[test]
    fn test_register_request_fields() {
        let values = FormValues::new()
            .with("firstName", "Ana")
            .with("lastName", "Ruiz")
            .with("email", "ana@bildy.es")
            .with("password", "pw");
        let request = register_request(&values);
        assert_eq!(request.first_name, "Ana");
        assert_eq!(request.last_name, "Ruiz");
    }
}
