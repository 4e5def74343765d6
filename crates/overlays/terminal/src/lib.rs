//! Draggable in-page terminal overlay backed by the headless console engine.
//!
//! The overlay owns presentation state only: visibility, window position, the
//! live input line, and the pacing timers the engine requests. All command
//! semantics live in [`console_core`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod render;

use std::{cell::Cell, cell::RefCell, rc::Rc, time::Duration};

use console_core::{
    CommandEnv, ConsoleEffect, RecallStep, SubmitOutcome, TerminalConsole, WELCOME_DELAY_MS,
};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use platform_host::ExternalUrlService;
use platform_host_web::WebExternalUrlService;
use portfolio_content::PortfolioContent;
use system_ui::prelude::*;

use render::render_entry;

const INITIAL_POSITION: (f64, f64) = (96.0, 96.0);

fn command_env(quote_pool_len: usize) -> CommandEnv {
    CommandEnv {
        now_local: platform_host_web::local_datetime_string(),
        quote_seed: platform_host_web::random_index(quote_pool_len.max(1)),
    }
}

#[component]
/// Floating terminal window plus its launcher button and `Ctrl+\`` chord.
///
/// Session state survives close/reopen; only unmounting the overlay drops it.
pub fn TerminalOverlay(
    /// Content set the console answers from.
    content: PortfolioContent,
    /// Invoked when the `theme` command requests a site-wide theme flip.
    #[prop(optional)]
    on_toggle_theme: Option<Callback<()>>,
) -> impl IntoView {
    let prompt_label = content.profile.prompt_label();
    let quote_pool_len = content.quotes.len();
    let console = create_rw_signal(TerminalConsole::new(content));

    let is_open = create_rw_signal(false);
    let input = create_rw_signal(String::new());
    let position = create_rw_signal(INITIAL_POSITION);
    let dragging = create_rw_signal(false);
    let welcome_shown = create_rw_signal(false);

    let surface_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let open_terminal = {
        let alive = alive.clone();
        move || {
            is_open.set(true);
            if welcome_shown.get_untracked() {
                return;
            }
            welcome_shown.set(true);
            let alive = alive.clone();
            set_timeout(
                move || {
                    if alive.get() {
                        console.update(|console| console.push_welcome_banner());
                    }
                },
                Duration::from_millis(u64::from(WELCOME_DELAY_MS)),
            );
        }
    };

    // Ctrl+` toggles the window from anywhere on the page.
    let chord_listener = window_event_listener(leptos::ev::keydown, {
        let open_terminal = open_terminal.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "`" && ev.ctrl_key() {
                ev.prevent_default();
                if is_open.get_untracked() {
                    is_open.set(false);
                } else {
                    open_terminal();
                }
            }
        }
    });
    on_cleanup(move || chord_listener.remove());

    let schedule_outcome = {
        let alive = alive.clone();
        move |outcome: SubmitOutcome| {
            for batch in outcome.delayed {
                let alive = alive.clone();
                let after_ms = batch.after_ms;
                let entries = batch.entries;
                set_timeout(
                    move || {
                        if alive.get() {
                            console.update(|console| console.append_delayed(entries));
                        }
                    },
                    Duration::from_millis(u64::from(after_ms)),
                );
            }
            match outcome.effect {
                Some(ConsoleEffect::OpenUrl { url, after_ms }) => {
                    let alive = alive.clone();
                    set_timeout(
                        move || {
                            if !alive.get() {
                                return;
                            }
                            spawn_local(async move {
                                let service = WebExternalUrlService;
                                if let Err(err) = service.open_url(&url).await {
                                    logging::warn!("external navigation failed: {err}");
                                }
                            });
                        },
                        Duration::from_millis(u64::from(after_ms)),
                    );
                }
                Some(ConsoleEffect::ToggleTheme) => {
                    if let Some(on_toggle_theme) = on_toggle_theme {
                        on_toggle_theme.call(());
                    }
                }
                None => {}
            }
        }
    };

    let submit_line: Rc<dyn Fn(String)> = Rc::new({
        let schedule_outcome = schedule_outcome.clone();
        move |raw: String| {
            let env = command_env(quote_pool_len);
            let mut outcome = None;
            console.update(|console| outcome = console.submit(&raw, &env));
            input.set(String::new());
            if let Some(outcome) = outcome {
                schedule_outcome(outcome);
            }
        }
    });

    let recall_step = move |step: RecallStep| match step {
        RecallStep::Entry(line) => input.set(line),
        RecallStep::LiveInput => input.set(String::new()),
        RecallStep::Unchanged => {}
    };

    // Keep the newest transcript entry visible.
    create_effect(move |_| {
        console.track();
        is_open.track();
        request_animation_frame(move || {
            if let Some(surface) = surface_ref.get_untracked() {
                surface.set_scroll_top(surface.scroll_height());
            }
        });
    });

    create_effect(move |_| {
        if is_open.get() {
            request_animation_frame(move || {
                if let Some(field) = input_ref.get_untracked() {
                    let _ = field.focus();
                }
            });
        }
    });

    // Drag listeners live only for the duration of one drag.
    let drag_listeners: Rc<RefCell<Vec<WindowListenerHandle>>> = Rc::new(RefCell::new(Vec::new()));
    on_cleanup({
        let drag_listeners = drag_listeners.clone();
        move || {
            for handle in drag_listeners.borrow_mut().drain(..) {
                handle.remove();
            }
        }
    });

    // A `Callback` is `Copy`, so the window's `Show` children stay `Fn`.
    let begin_drag = Callback::new({
        let drag_listeners = drag_listeners.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            let (x, y) = position.get_untracked();
            let grab = (f64::from(ev.client_x()) - x, f64::from(ev.client_y()) - y);
            dragging.set(true);

            let move_listener = window_event_listener(leptos::ev::pointermove, move |ev| {
                position.set((
                    f64::from(ev.client_x()) - grab.0,
                    f64::from(ev.client_y()) - grab.1,
                ));
            });
            let up_listener = window_event_listener(leptos::ev::pointerup, {
                let drag_listeners = drag_listeners.clone();
                move |_| {
                    dragging.set(false);
                    for handle in drag_listeners.borrow_mut().drain(..) {
                        handle.remove();
                    }
                }
            });
            drag_listeners
                .borrow_mut()
                .extend([move_listener, up_listener]);
        }
    });

    let entries = move || {
        console.with(|console| {
            console
                .transcript()
                .entries()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    let frame_style = move || {
        let (x, y) = position.get();
        format!("left: {x}px; top: {y}px;")
    };

    // `Copy` handles for everything the `Show` children capture.
    let prompt_title = store_value(prompt_label.clone());
    let prompt_row = store_value(format!("{prompt_label}:~$"));

    let launch = Callback::new({
        let open_terminal = open_terminal.clone();
        move |_: MouseEvent| open_terminal()
    });

    let on_prompt_keydown = Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => submit_line(input.get_untracked()),
        "ArrowUp" => {
            ev.prevent_default();
            let mut step = RecallStep::Unchanged;
            console.update(|console| {
                step = console.recall_mut().previous();
            });
            recall_step(step);
        }
        "ArrowDown" => {
            ev.prevent_default();
            let mut step = RecallStep::Unchanged;
            console.update(|console| {
                step = console.recall_mut().next();
            });
            recall_step(step);
        }
        _ => {}
    });

    view! {
        <Show when=move || !is_open.get() fallback=|| ()>
            <Button
                layout_class="terminal-launcher"
                variant=ButtonVariant::Accent
                aria_label="Open terminal"
                aria_keyshortcuts="Control+`"
                title="Terminal (Ctrl+`)"
                on_click=launch
            >
                ">_"
            </Button>
        </Show>
        <Show when=move || is_open.get() fallback=|| ()>
            <WindowFrame
                layout_class="terminal-window"
                style=Signal::derive(frame_style)
                aria_label="Terminal"
                dragging=dragging
            >
                <WindowTitleBar on_pointerdown=begin_drag>
                    <WindowTitle>
                        <Text role=TextRole::Code>{prompt_title.get_value()}</Text>
                    </WindowTitle>
                    <WindowControls>
                        <WindowControlButton
                            aria_label="Close terminal"
                            on_click=Callback::new(move |_| is_open.set(false))
                        >
                            "✕"
                        </WindowControlButton>
                    </WindowControls>
                </WindowTitleBar>
                <WindowBody layout_class="terminal-body">
                    <TerminalSurface node_ref=surface_ref role="log" aria_live="polite">
                        <TerminalTranscript aria_label="Terminal transcript">
                            <For each=entries key=|(index, _)| *index let:item>
                                {render_entry(&item.1)}
                            </For>
                        </TerminalTranscript>
                        <TerminalPrompt>
                            <Text role=TextRole::Code tone=TextTone::Accent>
                                {prompt_row.get_value()}
                            </Text>
                            <TextField
                                layout_class="terminal-input"
                                aria_label="Terminal input"
                                node_ref=input_ref
                                autocomplete="off"
                                spellcheck=false
                                ui_slot="terminal-input"
                                value=input
                                on_input=Callback::new(move |ev| {
                                    input.set(event_target_value(&ev));
                                })
                                on_keydown=on_prompt_keydown
                            />
                        </TerminalPrompt>
                    </TerminalSurface>
                </WindowBody>
            </WindowFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_env_tolerates_an_empty_quote_pool() {
        let env = command_env(0);
        assert_eq!(env.quote_seed, 0);
    }
}
