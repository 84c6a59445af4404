use crate::application::ports::urls::{Route, UrlResolver};
use crate::domain::content::{ContainerPath, ContentKind};

/// URL table of the publishing site.
#[derive(Debug, Default, Clone)]
pub struct SiteUrlResolver;

/// `base` followed by the container path, always ending with a slash.
fn with_path(base: String, path: &ContainerPath) -> String {
    if path.is_root() {
        base
    } else {
        format!("{base}{path}/")
    }
}

impl UrlResolver for SiteUrlResolver {
    fn reverse(&self, route: Route<'_>) -> String {
        match route {
            Route::ContentView { id, slug } => format!("/contenus/{id}/{slug}/"),
            Route::ContentOnline {
                kind,
                id,
                slug,
                path,
            } => {
                let section = match kind {
                    ContentKind::Tutorial => "tutoriels",
                    ContentKind::Article => "articles",
                };
                with_path(format!("/{section}/{id}/{slug}/"), path)
            }
            Route::ContentBeta { id, slug, path } => {
                with_path(format!("/contenus/beta/{id}/{slug}/"), path)
            }
            Route::AddReaction => "/contenus/reactions/ajouter/".into(),
            Route::UpdateReaction => "/contenus/reactions/editer/".into(),
            Route::AskValidation { id, slug } => format!("/validations/proposer/{id}/{slug}/"),
            Route::AcceptValidation { id } => format!("/validations/accepter/{id}/"),
            Route::CancelValidation { id } => format!("/validations/annuler/{id}/"),
            Route::RejectValidation { id } => format!("/validations/refuser/{id}/"),
            Route::RevokeValidation { id, slug } => format!("/validations/depublier/{id}/{slug}/"),
            Route::ActivateJsFiddle => "/contenus/activation-js/".into(),
            Route::MoveElement => "/contenus/deplacer/".into(),
            Route::WarnTypo => "/contenus/alerter/faute/".into(),
            Route::NewPrivateTopic => "/mp/creer/".into(),
            Route::HelpWriting => "/contenus/aides/".into(),
        }
    }
}
