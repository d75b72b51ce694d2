//! Framing of the visible window around the cursor.
//!
//! Both functions here expect a non-empty registry; the facade guards that
//! before calling.

use crate::panel::registry::Registry;

/// Makes sure the cursor points at something sensible before framing.
///
/// The cursor is reset when it is unset, out of range, resting on an entry
/// the filter just hid, or when the sort spec changed since the last pass
/// (positions mean something different after a reorder). The reset target is
/// the open entry when one is tracked, otherwise the first visible entry
/// scanning forward from the start. When every entry is hidden the cursor
/// stays on position 0 so framing still has an anchor.
pub fn revalidate_highlight(registry: &mut Registry, sort_changed: bool) {
    if registry.entries.is_empty() {
        registry.highlighted = None;
        return;
    }

    let stale = match registry.highlighted {
        None => true,
        Some(i) => i >= registry.entries.len() || registry.entries[i].is_hidden() || sort_changed,
    };
    if !stale {
        return;
    }

    if registry.open.is_some() {
        registry.highlighted = registry.open;
        return;
    }

    registry.highlighted = Some(0);
    if registry.entries[0].is_hidden() {
        registry.select_next();
    }
}

/// Recomputes `top` and `bottom` so the window contains the cursor.
///
/// Without an active filter the window is the cursor's raw page:
/// `top = (highlighted / page_size) * page_size`, `bottom` clamped to the
/// last entry. With the new-mail-only filter, pages are anchored to
/// *visible*-entry boundaries instead: the window advances from the start in
/// increments of `page_size` visible entries until it covers the cursor.
pub fn frame_viewport(registry: &mut Registry, page_size: usize, new_mail_only: bool) {
    let len = registry.entries.len();
    if len == 0 || page_size == 0 {
        return;
    }
    let Some(highlighted) = registry.highlighted else {
        return;
    };

    let (top, bottom);
    if new_mail_only {
        let mut window_top: i64 = -1;
        let mut window_bottom: i64 = -1;
        while window_bottom < highlighted as i64 {
            window_top = window_bottom + 1;
            let mut page_entries = 0;
            while page_entries < page_size {
                window_bottom += 1;
                if window_bottom >= len as i64 {
                    break;
                }
                if !registry.entries[window_bottom as usize].is_hidden() {
                    page_entries += 1;
                }
            }
        }
        top = window_top.max(0) as usize;
        bottom = window_bottom.max(0) as usize;
    } else {
        top = (highlighted / page_size) * page_size;
        bottom = top + page_size - 1;
    }

    registry.top = Some(top);
    registry.bottom = Some(bottom.min(len - 1));
}
