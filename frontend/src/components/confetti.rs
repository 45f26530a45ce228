use yew::prelude::*;
use gloo_timers::callback::Timeout;

const PIECES: usize = 60;
const COLOURS: [&str; 5] = ["#f5a623", "#1d3557", "#e63946", "#2a9d8f", "#ffd166"];

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    #[prop_or(4000)]
    pub duration_ms: u32,
}

/// Purely decorative burst shown after a successful submission.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |duration| {
            let timeout = Timeout::new(*duration, move || visible.set(false));
            move || drop(timeout)
        }, props.duration_ms);
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="confetti" aria-hidden="true">
            <style>
                {r#"
                    .confetti { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 50; }
                    .confetti-piece { position: absolute; top: -12px; width: 8px; height: 14px; animation: confetti-fall linear forwards; }
                    @keyframes confetti-fall {
                        to { transform: translateY(110vh) rotate(720deg); opacity: 0.2; }
                    }
                "#}
            </style>
            { for (0..PIECES).map(|i| {
                // spread pieces deterministically so re-renders don't jump around
                let left = (i * 37) % 100;
                let delay = (i * 53) % 900;
                let duration = 2200 + (i * 71) % 1600;
                let style = format!(
                    "left: {}%; background: {}; animation-delay: {}ms; animation-duration: {}ms;",
                    left, COLOURS[i % COLOURS.len()], delay, duration
                );
                html! { <span class="confetti-piece" {style}></span> }
            }) }
        </div>
    }
}
