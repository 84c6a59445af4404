//! User-facing validation messages.
//!
//! The platform is French-speaking; messages are kept verbatim so that
//! templates and front-end tests can match on them.

pub const REQUIRED: &str = "Ce champ est obligatoire.";
pub const TITLE_BLANK: &str = "Le champ du titre ne peut être vide.";
pub const COMMENT_TOO_SHORT: &str = "Votre commentaire doit faire au moins 3 caractères.";

pub const NOTE_BLANK: &str = "Vous devez écrire une réponse !";
pub const VALIDATORS_COMMENT_BLANK: &str = "Vous devez fournir un commentaire aux validateurs.";
pub const CANCEL_BLANK: &str = "Merci de fournir une raison à l'annulation.";
pub const REJECT_BLANK: &str = "Merci de fournir une raison au rejet.";
pub const REVOKE_BLANK: &str = "Veuillez entrer la raison de votre dépublication.";
pub const TYPO_BLANK: &str = "Vous devez indiquer la faute commise.";

pub const TUTO_EXTENSION: &str = "Le fichier doit être au format .tuto";
pub const ZIP_EXTENSION: &str = "Le fichier doit être au format .zip";
pub const ARCHIVE_EXTENSION: &str = "L'archive doit être au format ZIP";
pub const INVALID_IMAGE: &str = "Téléversez une image valide. Le fichier que vous avez \
                                 transféré n'est pas une image ou bien est corrompu.";

pub const UNKNOWN_MEMBERS: &str = "Aucun des membres indiqués n'a pu être trouvé.";
pub const INVALID_SLUG: &str = "Cet identifiant n'est pas valide.";
pub const INVALID_MOVE: &str = "Méthode de déplacement inconnue.";

pub fn too_long(max: usize, actual: usize) -> String {
    format!("Assurez-vous que cette valeur comporte au plus {max} caractères (actuellement {actual}).")
}

pub fn note_too_long(max: usize) -> String {
    format!("Ce message est trop long, il ne doit pas dépasser {max} caractères")
}

pub fn invalid_choice(value: &str) -> String {
    format!("Sélectionnez un choix valide. {value} n'en fait pas partie.")
}

pub fn image_too_large(max_bytes: u64) -> String {
    format!(
        "Votre image est trop lourde, la limite autorisée est de {} Ko",
        max_bytes / 1024
    )
}

/// Placeholder of the note text while the member must wait `delay` between
/// two notes.
pub fn flood_wait(delay: chrono::Duration) -> String {
    let seconds = delay.num_seconds();
    let wait = match (seconds / 60, seconds % 60) {
        (1, 0) => "1 minute".to_string(),
        (minutes, 0) if minutes > 0 => format!("{minutes} minutes"),
        _ if seconds <= 1 => format!("{seconds} seconde"),
        _ => format!("{seconds} secondes"),
    };
    format!(
        "Vous venez de poster. Merci de patienter au moins {wait} \
         entre deux messages consécutifs afin de limiter le flood."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn flood_wait_follows_the_configured_delay() {
        assert_eq!(
            flood_wait(Duration::minutes(15)),
            "Vous venez de poster. Merci de patienter au moins 15 minutes \
             entre deux messages consécutifs afin de limiter le flood."
        );
        assert!(flood_wait(Duration::minutes(1)).contains("au moins 1 minute entre"));
        assert!(flood_wait(Duration::seconds(90)).contains("au moins 90 secondes entre"));
    }
}
