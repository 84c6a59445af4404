//! Names under which the forms are exposed, grouped by the object they are
//! built around.

use std::fmt;
use std::str::FromStr;

use crate::application::error::ApplicationError;

macro_rules! form_names {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $slug:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $slug),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ApplicationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($slug => Ok(Self::$variant),)+
                    other => Err(ApplicationError::not_found(format!("form '{other}'"))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

form_names! {
    /// Forms that need no context object.
    StandaloneForm {
        Author => "author",
        Container => "container",
        Content => "content",
        Extract => "extract",
        Import => "import",
        ImportContent => "import-content",
        ImportNewContent => "import-new-content",
        Beta => "beta",
        JsFiddle => "js-fiddle",
        MoveElement => "move-element",
    }
}

form_names! {
    /// Forms built around an existing content.
    ContentBoundForm {
        Note => "note",
        NoteEdit => "note-edit",
        AskValidation => "ask-validation",
        RevokeValidation => "revoke-validation",
        WarnTypo => "warn-typo",
        JsFiddle => "js-fiddle",
    }
}

form_names! {
    /// Forms built around a pending validation.
    ValidationBoundForm {
        AcceptValidation => "accept-validation",
        CancelValidation => "cancel-validation",
        RejectValidation => "reject-validation",
    }
}
