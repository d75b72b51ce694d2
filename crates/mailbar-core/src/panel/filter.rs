//! Visibility filtering of panel entries.
//!
//! Visibility is a pure function of folder state and policy, so it is
//! recomputed from scratch at the start of every prepare pass — folder
//! counters change elsewhere in the application without telling the panel.

use crate::config::PanelConfig;
use crate::panel::registry::Registry;
use crate::store::MailStore;

/// Recomputes each entry's hidden flag.
///
/// With the new-mail-only policy off, every entry is visible. With it on,
/// an entry stays visible if any of the following holds:
/// - it is the entry tracked as open,
/// - its folder has unread or flagged mail, or a has-new signal,
/// - its folder is the store's open folder (the live mailbox),
/// - its path or description appears in the always-show list.
///
/// Everything else is hidden. Idempotent.
pub fn update_visibility(registry: &mut Registry, store: &dyn MailStore, config: &PanelConfig) {
    let open_index = registry.open();
    let open_folder = store.open_folder();

    for i in 0..registry.entries.len() {
        let folder = registry.entries[i].folder();
        registry.entries[i].set_hidden(false);

        if !config.new_mail_only {
            continue;
        }

        if Some(i) == open_index {
            continue;
        }

        let counts = store.counts(folder);
        if counts.unread > 0 || counts.flagged > 0 || store.has_new(folder) {
            continue;
        }

        if open_folder == Some(folder) {
            // the live mailbox stays listed even when its counters are zero
            continue;
        }

        let path = store.path(folder);
        let description = store.description(folder);
        if config
            .always_show
            .iter()
            .any(|s| s == path || description == Some(s.as_str()))
        {
            continue;
        }

        registry.entries[i].set_hidden(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn hidden_flags(registry: &Registry) -> Vec<bool> {
        registry.entries().iter().map(|e| e.is_hidden()).collect()
    }

    #[test]
    fn filter_off_shows_everything() {
        let mut store = MemoryStore::new();
        let a = store.add_folder("a");
        let b = store.add_folder("b");

        let mut registry = Registry::new();
        registry.insert(a, None);
        registry.insert(b, None);

        update_visibility(&mut registry, &store, &PanelConfig::default());

        assert_eq!(hidden_flags(&registry), vec![false, false]);
    }

    #[test]
    fn filter_hides_quiet_folders_only() {
        let mut store = MemoryStore::new();
        let quiet = store.add_folder("quiet");
        let unread = store.add_folder("unread");
        let flagged = store.add_folder("flagged");
        let fresh = store.add_folder("fresh");
        store.set_unread(unread, 3);
        store.set_flagged(flagged, 1);
        store.set_has_new(fresh, true);

        let mut registry = Registry::new();
        for f in [quiet, unread, flagged, fresh] {
            registry.insert(f, None);
        }

        let config = PanelConfig {
            new_mail_only: true,
            ..PanelConfig::default()
        };
        update_visibility(&mut registry, &store, &config);

        assert_eq!(hidden_flags(&registry), vec![true, false, false, false]);
    }

    #[test]
    fn open_entry_is_never_hidden() {
        let mut store = MemoryStore::new();
        let a = store.add_folder("a");
        let b = store.add_folder("b");
        store.set_open(Some(a));

        let mut registry = Registry::new();
        registry.insert(a, Some(a));
        registry.insert(b, Some(a));

        let config = PanelConfig {
            new_mail_only: true,
            ..PanelConfig::default()
        };
        update_visibility(&mut registry, &store, &config);

        assert_eq!(hidden_flags(&registry), vec![false, true]);
    }

    #[test]
    fn open_folder_stays_visible_even_without_open_index() {
        let mut store = MemoryStore::new();
        let a = store.add_folder("a");
        store.set_open(Some(a));

        // open index not tracked, e.g. before the first sync
        let mut registry = Registry::new();
        registry.insert(a, None);

        let config = PanelConfig {
            new_mail_only: true,
            ..PanelConfig::default()
        };
        update_visibility(&mut registry, &store, &config);

        assert_eq!(hidden_flags(&registry), vec![false]);
    }

    #[test]
    fn always_show_matches_path_or_description() {
        let mut store = MemoryStore::new();
        let by_path = store.add_folder("mail/archive");
        let by_desc = store.add_folder("mail/lists");
        let other = store.add_folder("mail/misc");
        store.set_description(by_desc, Some("Mailing lists".to_string()));

        let mut registry = Registry::new();
        for f in [by_path, by_desc, other] {
            registry.insert(f, None);
        }

        let config = PanelConfig {
            new_mail_only: true,
            always_show: vec!["mail/archive".to_string(), "Mailing lists".to_string()],
            ..PanelConfig::default()
        };
        update_visibility(&mut registry, &store, &config);

        assert_eq!(hidden_flags(&registry), vec![false, false, true]);
    }

    #[test]
    fn filter_is_idempotent_and_unhides_on_count_change() {
        let mut store = MemoryStore::new();
        let a = store.add_folder("a");

        let mut registry = Registry::new();
        registry.insert(a, None);

        let config = PanelConfig {
            new_mail_only: true,
            ..PanelConfig::default()
        };
        update_visibility(&mut registry, &store, &config);
        update_visibility(&mut registry, &store, &config);
        assert_eq!(hidden_flags(&registry), vec![true]);

        store.set_unread(a, 1);
        update_visibility(&mut registry, &store, &config);
        assert_eq!(hidden_flags(&registry), vec![false]);
    }
}
