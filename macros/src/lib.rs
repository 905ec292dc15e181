//! Derive macros for the todo-board reducer architecture
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Classifies action variants as list commands or UI intents
//!
//! # Example
//!
//! ```ignore
//! use todo_board_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     Remove { position: usize },
//!
//!     #[intent]
//!     ToggleFilter,
//! }
//!
//! // Generated methods:
//! assert!(TodoAction::Remove { position: 0 }.is_command());
//! assert!(TodoAction::ToggleFilter.is_intent());
//! assert_eq!(TodoAction::ToggleFilter.name(), "ToggleFilter");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant changes the stored list
/// - `is_intent()` - Returns true if this variant only changes session/UI state
/// - `name()` - Returns the variant name, used as a stable label in logs and metrics
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a list command
/// - `#[intent]` - Mark a variant as a UI intent
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[intent]` attributes
#[proc_macro_derive(Action, attributes(command, intent))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut command_arms = Vec::new();
    let mut intent_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_intent = has_attribute(&variant.attrs, "intent");

        if is_command && is_intent {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[command] and #[intent]",
            )
            .to_compile_error()
            .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);
        let label = variant.ident.to_string();

        if is_command {
            command_arms.push(quote! { #pattern => true, });
        }
        if is_intent {
            intent_arms.push(quote! { #pattern => true, });
        }
        name_arms.push(quote! { #pattern => #label, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action changes the stored list
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action only changes session or display state
            #[must_use]
            pub const fn is_intent(&self) -> bool {
                match self {
                    #(#intent_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Builds a match pattern that ignores the variant's fields
fn variant_pattern(variant: &Ident, fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
