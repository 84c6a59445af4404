use chrono::Duration;

/// Site-wide limits and labels the forms depend on.
#[derive(Debug, Clone)]
pub struct FormSettings {
    pub site_name: String,
    pub licence_info_url: String,
    pub licence_info_label: String,
    pub title_max_length: usize,
    pub description_max_length: usize,
    pub commit_message_max_length: usize,
    pub max_post_length: usize,
    pub image_max_size: u64,
    pub antispam_delay: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            site_name: "Zeste de Savoir".into(),
            licence_info_url: "https://zestedesavoir.com/tutoriels/281/le-droit-dauteur-creative-commons-et-les-licences-sur-zeste-de-savoir/".into(),
            licence_info_label: "Le droit d'auteur, Creative Commons et les licences sur Zeste de Savoir".into(),
            title_max_length: 80,
            description_max_length: 200,
            commit_message_max_length: 80,
            max_post_length: 1_000_000,
            image_max_size: 1024 * 1024,
            antispam_delay: Duration::minutes(15),
        }
    }
}
