//! Built-in routes of the savings-group dashboard.
//!
//! `podcasts` and `articles` sit at the root next to `content`, not under
//! it. Names such as `content.articles` therefore fail with
//! `UnknownRoute`; the tree is kept as declared rather than guessed at.

use crate::routing::registry::Registry;

impl Registry {
    /// The dashboard's route tree.
    pub fn dashboard() -> Self {
        Registry::builder()
            .literal("dashboard", "/dashboard")
            .group("members", |g| {
                g.literal("list", "/members")
                    .literal("add", "/members/add")
                    .literal("profile", "/members/[id]")
                    .template("view", "/members/{id}")
                    .template("edit", "/members/{id}/edit")
            })
            .group("savings", |g| {
                g.literal("list", "/savings")
                    .literal("add", "/savings/add")
                    .template("view", "/savings/{id}")
            })
            .group("meetings", |g| {
                g.literal("list", "/meetings")
                    .literal("schedule", "/meetings/schedule")
                    .template("view", "/meetings/{id}")
            })
            .group("loans", |g| {
                g.literal("list", "/loans")
                    .literal("apply", "/loans/apply")
                    .template("view", "/loans/{id}")
            })
            .group("ngumbato", |g| {
                g.literal("list", "/ngumbato")
                    .literal("add", "/ngumbato/add")
                    .template("view", "/ngumbato/{id}")
            })
            .group("investments", |g| {
                g.literal("list", "/investments")
                    .literal("add", "/investments/add")
                    .template("view", "/investments/{id}")
            })
            .group("withdrawals", |g| {
                g.literal("list", "/withdrawals")
                    .literal("request", "/withdrawals/request")
                    .template("view", "/withdrawals/{id}")
            })
            .group("fines", |g| {
                g.literal("list", "/fines")
                    .literal("add", "/fines/add")
                    .template("view", "/fines/{id}")
            })
            .group("reports", |g| {
                g.literal("overview", "/reports")
                    .literal("savings", "/reports/savings")
                    .literal("loans", "/reports/loans")
                    .template("member", "/reports/members/{id}")
            })
            .group("content", |g| g.literal("overview", "/content"))
            .group("podcasts", |g| {
                g.literal("list", "/content/podcasts")
                    .literal("add", "/content/podcasts/add")
                    .template("view", "/content/podcasts/{id}")
            })
            .group("articles", |g| {
                g.literal("list", "/content/articles")
                    .literal("add", "/content/articles/add")
                    .template("view", "/content/articles/{slug}")
            })
            .literal("settings", "/settings")
            .build_unchecked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::node::RouteKind;

    #[test]
    fn test_dashboard_passes_structural_check() {
        assert_eq!(Registry::dashboard().validate(), Ok(()));
    }

    #[test]
    fn test_top_level_domains() {
        let registry = Registry::dashboard();
        let mut expected = vec![
            "dashboard", "members", "savings", "meetings", "loans", "ngumbato", "investments",
            "withdrawals", "fines", "reports", "content", "podcasts", "articles", "settings",
        ];
        expected.sort_unstable();
        assert_eq!(registry.top_level_names(), expected);
    }

    #[test]
    fn test_every_leaf_is_rooted_and_non_empty() {
        let registry = Registry::dashboard();
        for entry in registry.entries() {
            assert!(entry.path.starts_with('/'), "{} -> {}", entry.name, entry.path);
            assert!(!entry.name.is_empty());
        }
    }

    #[test]
    fn test_settings_and_dashboard_are_literals() {
        let registry = Registry::dashboard();
        assert_eq!(registry.get("settings").map(|n| n.kind()), Some(RouteKind::Literal));
        assert_eq!(registry.get("dashboard").map(|n| n.kind()), Some(RouteKind::Literal));
    }
}
