//! Command palette overlay: fuzzy-free substring search over site navigation.
//!
//! The filtering and selection rules live in [`console_core::palette`]; this
//! crate renders the overlay, owns the global `Ctrl/Cmd+K` chord, and executes
//! the section jumps the state machine selects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use console_core::{navigation_registry, PaletteState, Registry, SectionJump};
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

/// Row model for one visible palette entry: filtered position plus display
/// metadata. The position is part of the row's identity so keyed rendering
/// rebuilds a row whenever filtering moves it.
type PaletteRow = (usize, &'static str, &'static str, &'static str);

fn visible_rows(state: &PaletteState, registry: &Registry<SectionJump>) -> Vec<PaletteRow> {
    state
        .filtered(registry)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| (index, entry.id, entry.title, entry.category))
        .collect()
}

fn is_palette_chord(key: &str, ctrl: bool, meta: bool) -> bool {
    // Shifted chords report "K"; only the exact lowercase key toggles.
    (ctrl || meta) && key == "k"
}

#[component]
/// Modal command palette toggled by `Ctrl+K` (or `Cmd+K` on macOS).
///
/// Opening always starts from an empty query with the first row selected.
pub fn PaletteOverlay() -> impl IntoView {
    let registry = store_value(navigation_registry());
    let open = create_rw_signal(false);
    let state = create_rw_signal(PaletteState::default());
    let input_ref = create_node_ref::<html::Input>();

    let filtered_len = move || state.with_untracked(|state| {
        registry.with_value(|registry| state.filtered(registry).len())
    });

    let close_palette = move || {
        open.set(false);
        state.update(|state| state.reset());
    };

    let activate_selection = move || {
        let jump = state.with_untracked(|state| {
            registry.with_value(|registry| state.activate(registry).copied())
        });
        if let Some(jump) = jump {
            if let Err(err) = platform_host_web::scroll_to_anchor(jump.anchor) {
                logging::warn!("palette navigation failed: {err}");
            }
        }
        // The palette closes and forgets its query even when no row matched.
        close_palette();
    };

    let chord_listener = window_event_listener(leptos::ev::keydown, move |ev: KeyboardEvent| {
        let key = ev.key();
        if is_palette_chord(&key, ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            if open.get_untracked() {
                close_palette();
            } else {
                state.set(PaletteState::default());
                open.set(true);
            }
            return;
        }
        if !open.get_untracked() {
            return;
        }
        match key.as_str() {
            "Escape" => close_palette(),
            "ArrowDown" => {
                ev.prevent_default();
                let len = filtered_len();
                state.update(|state| state.move_down(len));
            }
            "ArrowUp" => {
                ev.prevent_default();
                let len = filtered_len();
                state.update(|state| state.move_up(len));
            }
            "Enter" => {
                ev.prevent_default();
                activate_selection();
            }
            _ => {}
        }
    });
    on_cleanup(move || chord_listener.remove());

    create_effect(move |_| {
        if open.get() {
            request_animation_frame(move || {
                if let Some(field) = input_ref.get_untracked() {
                    let _ = field.focus();
                }
            });
        }
    });

    let rows = move || {
        state.with(|state| registry.with_value(|registry| visible_rows(state, registry)))
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="palette-backdrop" on:mousedown=move |_| close_palette()>
                <MenuSurface
                    layout_class="palette-surface"
                    role="dialog"
                    aria_label="Command palette"
                >
                    <div
                        class="palette-inner"
                        on:mousedown=move |ev| ev.stop_propagation()
                    >
                        <TextField
                            layout_class="palette-input"
                            placeholder="Type a command or search..."
                            aria_label="Palette search"
                            node_ref=input_ref
                            autocomplete="off"
                            spellcheck=false
                            ui_slot="palette-input"
                            value=Signal::derive(move || state.with(|state| state.query().to_string()))
                            on_input=Callback::new(move |ev| {
                                state.update(|state| state.set_query(event_target_value(&ev)));
                            })
                        />
                        <Stack gap=LayoutGap::None layout_class="palette-results" ui_slot="palette-results">
                            <For each=rows key=|row| (row.0, row.1) let:row>
                                {
                                    let (index, _, title, category) = row;
                                    view! {
                                        <MenuItem
                                            selected=Signal::derive(move || {
                                                state.with(|state| state.selected() == index)
                                            })
                                            on_click=Callback::new(move |_| {
                                                state.update(|state| state.select(index));
                                                activate_selection();
                                            })
                                            on_mouseenter=Callback::new(move |_| {
                                                state.update(|state| state.select(index));
                                            })
                                        >
                                            <Text>{title}</Text>
                                            <Badge tone=TextTone::Secondary>{category}</Badge>
                                        </MenuItem>
                                    }
                                }
                            </For>
                            <Show
                                when=move || {
                                    state.with(|state| {
                                        registry.with_value(|registry| state.filtered(registry).is_empty())
                                    })
                                }
                                fallback=|| ()
                            >
                                <EmptyState>"No commands found"</EmptyState>
                            </Show>
                        </Stack>
                        <Cluster gap=LayoutGap::Sm layout_class="palette-hints" ui_slot="palette-hints">
                            <Kbd>"↑↓"</Kbd>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>"navigate"</Text>
                            <Kbd>"↵"</Kbd>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>"select"</Text>
                            <Kbd>"esc"</Kbd>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>"close"</Text>
                        </Cluster>
                    </div>
                </MenuSurface>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_identity_tracks_the_filtered_position() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();

        let before = visible_rows(&state, &registry);
        assert_eq!((before[1].0, before[1].1), (1, "projects"));

        // Filtering moves the projects row to position 0; its key must change
        // so the rendered row (and the index it captured) is rebuilt there.
        state.set_query("p");
        let after = visible_rows(&state, &registry);
        assert_eq!((after[0].0, after[0].1), (0, "projects"));
        assert_ne!((before[1].0, before[1].1), (after[0].0, after[0].1));
    }

    #[test]
    fn selecting_a_filtered_row_activates_that_row() {
        let registry = navigation_registry();
        let mut state = PaletteState::default();
        state.set_query("p");

        let rows = visible_rows(&state, &registry);
        let projects = rows
            .iter()
            .find(|row| row.1 == "projects")
            .expect("projects row");
        state.select(projects.0);
        assert_eq!(
            state.activate(&registry),
            Some(&SectionJump { anchor: "projects" })
        );
    }

    #[test]
    fn chord_requires_the_exact_lowercase_key() {
        assert!(is_palette_chord("k", true, false));
        assert!(is_palette_chord("k", false, true));
        assert!(!is_palette_chord("K", true, false));
        assert!(!is_palette_chord("k", false, false));
    }
}
