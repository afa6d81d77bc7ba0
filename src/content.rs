use dioxus::prelude::*;

/// Everything the admin editor can change. One instance lives in context for
/// the whole page; the editor's save action is the only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_location: String,
    pub social_links: SocialLinks,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
    pub medium: String,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            hero_title: "Hello, I'm Franz".to_string(),
            hero_subtitle:
                "Innovating for a Better World with AI, Data, and Code: Empowering Human Progress."
                    .to_string(),
            about_text: "I'm a passionate Data Scientist and AI Specialist with expertise in \
                         machine learning, frontend development, and data analysis. I love \
                         turning complex data into actionable insights and building intelligent \
                         systems that make a difference."
                .to_string(),
            contact_email: "franzkingstein@outlook.com".to_string(),
            contact_phone: "+91 9092043143".to_string(),
            contact_location: "Coimbatore, India".to_string(),
            social_links: SocialLinks {
                github: "https://github.com/Franz-kingstein".to_string(),
                linkedin: "https://linkedin.com/in/franz-kingstein7/".to_string(),
                email: "mailto:franzkingstein@outlook.com".to_string(),
                medium: "https://medium.com/@franzkingstein".to_string(),
            },
        }
    }
}

/// A partial update. Absent fields keep their current value, including each
/// social link on its own; a partial `social_links` cannot wipe out its
/// siblings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentUpdate {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub about_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_location: Option<String>,
    pub social_links: Option<SocialLinksUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SocialLinksUpdate {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub medium: Option<String>,
}

impl PortfolioContent {
    pub fn merge(&mut self, update: ContentUpdate) {
        merge_field(&mut self.hero_title, update.hero_title);
        merge_field(&mut self.hero_subtitle, update.hero_subtitle);
        merge_field(&mut self.about_text, update.about_text);
        merge_field(&mut self.contact_email, update.contact_email);
        merge_field(&mut self.contact_phone, update.contact_phone);
        merge_field(&mut self.contact_location, update.contact_location);
        if let Some(links) = update.social_links {
            merge_field(&mut self.social_links.github, links.github);
            merge_field(&mut self.social_links.linkedin, links.linkedin);
            merge_field(&mut self.social_links.email, links.email);
            merge_field(&mut self.social_links.medium, links.medium);
        }
    }
}

fn merge_field(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

pub fn provide_content_store() -> Signal<PortfolioContent> {
    use_context_provider(|| Signal::new(PortfolioContent::default()))
}

pub fn use_content() -> Signal<PortfolioContent> {
    use_context::<Signal<PortfolioContent>>()
}

/// Single writer path for the store; everything else reads snapshots.
pub fn commit_update(mut store: Signal<PortfolioContent>, update: ContentUpdate) {
    let mut next = store();
    next.merge(update);
    store.set(next);
    tracing::debug!("content store updated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_fields_keep_prior_values() {
        let mut content = PortfolioContent::default();
        let before = content.clone();
        content.merge(ContentUpdate {
            hero_title: Some("Hello, I'm Someone Else".to_string()),
            ..ContentUpdate::default()
        });

        assert_eq!(content.hero_title, "Hello, I'm Someone Else");
        assert_eq!(content.hero_subtitle, before.hero_subtitle);
        assert_eq!(content.about_text, before.about_text);
        assert_eq!(content.social_links, before.social_links);
    }

    #[test]
    fn partial_social_update_keeps_sibling_links() {
        let mut content = PortfolioContent::default();
        let before = content.social_links.clone();
        content.merge(ContentUpdate {
            social_links: Some(SocialLinksUpdate {
                github: Some("https://github.com/someone-else".to_string()),
                ..SocialLinksUpdate::default()
            }),
            ..ContentUpdate::default()
        });

        assert_eq!(content.social_links.github, "https://github.com/someone-else");
        assert_eq!(content.social_links.linkedin, before.linkedin);
        assert_eq!(content.social_links.email, before.email);
        assert_eq!(content.social_links.medium, before.medium);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut content = PortfolioContent::default();
        let before = content.clone();
        content.merge(ContentUpdate::default());
        assert_eq!(content, before);
    }
}
