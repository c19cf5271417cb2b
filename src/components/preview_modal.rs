use yew::prelude::*;
use web_sys::MouseEvent;

use crate::preview::{PreviewTarget, ViewMode};

#[derive(Properties, PartialEq)]
pub struct PreviewModalProps {
    pub target: PreviewTarget,
    pub mode: ViewMode,
    pub on_close: Callback<MouseEvent>,
    pub on_select_mode: Callback<ViewMode>,
}

/// In-page preview of an external site. The frame is sandboxed, so the
/// target never gets access to the host page's storage or scripts.
#[function_component(PreviewModal)]
pub fn preview_modal(props: &PreviewModalProps) -> Html {
    html! {
        <div class="preview-overlay" onclick={props.on_close.clone()}>
            <div class="preview-dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="preview-toolbar">
                    <span class="preview-title">{ &props.target.title }</span>
                    <div class="preview-modes">
                        { ViewMode::ALL.iter().map(|mode| {
                            let mode = *mode;
                            let on_select_mode = props.on_select_mode.clone();
                            let class = if props.mode == mode {
                                "mode-button active"
                            } else {
                                "mode-button"
                            };
                            html! {
                                <button
                                    key={mode.label()}
                                    class={class}
                                    onclick={Callback::from(move |_: MouseEvent| on_select_mode.emit(mode))}
                                >
                                    { mode.label() }
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>
                    <div class="preview-actions">
                        <a
                            class="open-tab-link"
                            href={props.target.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Open in new tab"}
                        </a>
                        <button class="close-button" onclick={props.on_close.clone()}>
                            {"Close"}
                        </button>
                    </div>
                </div>
                <div class="preview-stage">
                    <iframe
                        class="preview-frame"
                        src={props.target.url.clone()}
                        title={props.target.title.clone()}
                        sandbox="allow-scripts allow-forms"
                        style={format!("width: {};", props.mode.frame_width())}
                    />
                </div>
            </div>
            <style>
                {r#"
                .preview-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.85);
                    backdrop-filter: blur(8px);
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }
                .preview-dialog {
                    width: 100%;
                    max-width: 80rem;
                    height: 85vh;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                }
                .preview-toolbar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.9rem 1.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .preview-title {
                    font-size: 0.8rem;
                    font-weight: 900;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }
                .preview-modes {
                    display: flex;
                    gap: 0.5rem;
                }
                .mode-button {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                    color: rgba(255, 255, 255, 0.4);
                    padding: 0.4rem 1rem;
                    font-size: 0.6rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .mode-button:hover {
                    color: #ffffff;
                }
                .mode-button.active {
                    background: #ffffff;
                    color: #000000;
                    border-color: #ffffff;
                }
                .preview-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .open-tab-link {
                    font-size: 0.6rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                    white-space: nowrap;
                }
                .open-tab-link:hover {
                    color: #ffffff;
                }
                .close-button {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 999px;
                    color: #ffffff;
                    padding: 0.4rem 1rem;
                    font-size: 0.6rem;
                    font-weight: 900;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .close-button:hover {
                    background: #ffffff;
                    color: #000000;
                }
                .preview-stage {
                    flex-grow: 1;
                    display: flex;
                    justify-content: center;
                    background: #141414;
                    overflow: auto;
                }
                .preview-frame {
                    height: 100%;
                    border: none;
                    background: #ffffff;
                    transition: width 0.4s ease;
                }
                @media (max-width: 768px) {
                    .preview-overlay {
                        padding: 0.5rem;
                    }
                    .preview-toolbar {
                        flex-wrap: wrap;
                    }
                    .preview-modes {
                        order: 3;
                        width: 100%;
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
