//! Address block shared by the client and project forms.

use api::Address;

use super::schema::{FieldKind, FieldSpec, FormSection, FormValues, Rule};

/// Client addresses: number and postal code must be whole numbers.
pub const CLIENT_ADDRESS_SECTION: FormSection = FormSection {
    heading: Some("Address"),
    fields: &[
        STREET,
        FieldSpec::new("address.number", "Number", FieldKind::Number).rules(&[
            Rule::Required("Number is required"),
            Rule::Integer("Number must be a whole number"),
        ]),
        FieldSpec::new("address.postal", "Postal Code", FieldKind::Number).rules(&[
            Rule::Required("Postal code is required"),
            Rule::Integer("Postal code must be a whole number"),
        ]),
        CITY,
        PROVINCE,
    ],
};

/// Project addresses take free text, e.g. `12B` or `08001`.
pub const PROJECT_ADDRESS_SECTION: FormSection = FormSection {
    heading: Some("Address"),
    fields: &[
        STREET,
        FieldSpec::new("address.number", "Number", FieldKind::Text)
            .rules(&[Rule::Required("Number is required")]),
        FieldSpec::new("address.postal", "Postal Code", FieldKind::Text)
            .rules(&[Rule::Required("Postal code is required")]),
        CITY,
        PROVINCE,
    ],
};

const STREET: FieldSpec = FieldSpec::new("address.street", "Street", FieldKind::Text)
    .rules(&[Rule::Required("Street is required")]);

const CITY: FieldSpec =
    FieldSpec::new("address.city", "City", FieldKind::Text).rules(&[Rule::Required("City is required")]);

const PROVINCE: FieldSpec = FieldSpec::new("address.province", "Province", FieldKind::Text)
    .rules(&[Rule::Required("Province is required")]);

/// Add `address` to `values`.
pub fn address_values(values: FormValues, address: &Address) -> FormValues {
    values
        .with("address.street", address.street.clone())
        .with("address.number", address.number.clone())
        .with("address.postal", address.postal.clone())
        .with("address.city", address.city.clone())
        .with("address.province", address.province.clone())
}

/// Every part is copied as entered.
pub fn address_from(values: &FormValues) -> Address {
    Address {
        street: values.get("address.street").to_string(),
        number: values.get("address.number").to_string(),
        postal: values.get("address.postal").to_string(),
        city: values.get("address.city").to_string(),
        province: values.get("address.province").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_roundtrip_keeps_text_verbatim() {
        let address = Address {
            street: " Calle Mayor ".into(),
            number: "12B".into(),
            postal: "08001".into(),
            city: "Barcelona".into(),
            province: "Barcelona".into(),
        };
        let values = address_values(FormValues::new(), &address);
        assert_eq!(values.get("address.number"), "12B");
        assert_eq!(values.get("address.postal"), "08001");
        assert_eq!(address_from(&values), address);
    }

    #[test]
    fn test_zero_is_shown() {
        let address = Address {
            number: "0".into(),
            ..Default::default()
        };
        let values = address_values(FormValues::new(), &address);
        assert_eq!(values.get("address.number"), "0");
        assert_eq!(values.get("address.postal"), "");
    }
}
