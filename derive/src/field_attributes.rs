use crate::WHITTLE_ATTRIBUTE_NAME;
use syn::{spanned::Spanned, *};

/// Determines how a field's value is produced in a reduced value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldBehavior {
    /// Reduce this field with its own rule (the default behavior).
    Reduce,

    /// Never reduce this field; clone it as is.
    Ignore,
}

impl FieldBehavior {
    pub fn for_field(field: &Field) -> Result<FieldBehavior> {
        match fetch_attr_from_field(field)? {
            Some(attr) => parse_attribute(attr),
            None => Ok(FieldBehavior::Reduce),
        }
    }
}

fn fetch_attr_from_field(field: &Field) -> Result<Option<&Attribute>> {
    let found_attributes: Vec<_> = field
        .attrs
        .iter()
        .filter(|a| a.path().is_ident(WHITTLE_ATTRIBUTE_NAME))
        .collect();
    if found_attributes.len() > 1 {
        let msg = format!("Multiple conflicting #[{WHITTLE_ATTRIBUTE_NAME}] attributes found");
        return Err(syn::Error::new(field.span(), msg));
    }
    Ok(found_attributes.into_iter().next())
}

fn parse_attribute(attr: &Attribute) -> Result<FieldBehavior> {
    let Meta::List(meta_list) = &attr.meta else {
        let msg = format!("#[{WHITTLE_ATTRIBUTE_NAME}] must contain a group");
        return Err(syn::Error::new(attr.span(), msg));
    };

    let mut tokens_iter = meta_list.tokens.clone().into_iter();
    let token = tokens_iter.next().ok_or_else(|| {
        let msg = format!("#[{WHITTLE_ATTRIBUTE_NAME}] cannot be empty.");
        syn::Error::new(meta_list.span(), msg)
    })?;
    if let Some(extra) = tokens_iter.next() {
        let msg = format!("Unexpected token in #[{WHITTLE_ATTRIBUTE_NAME}]: `{extra}`");
        return Err(syn::Error::new(extra.span(), msg));
    }

    match token.to_string().as_ref() {
        "ignore" => Ok(FieldBehavior::Ignore),
        _ => {
            let msg = format!("Unknown option for #[{WHITTLE_ATTRIBUTE_NAME}]: `{token}`");
            Err(syn::Error::new(token.span(), msg))
        }
    }
}
