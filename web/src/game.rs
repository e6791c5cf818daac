use crate::utils::*;
use core::time::Duration;
use gloo::timers::callback::{Interval, Timeout};
use pexeso_core as game;
use yew::html::Scope;
use yew::prelude::*;

/// Keeps a gloo timer alive, dropping it cancels the timer.
pub(crate) enum TimerHandle {
    Once { _timeout: Timeout },
    Every { _interval: Interval },
}

/// Schedules session timers on the browser event loop and posts them back to the view.
pub(crate) struct GlooScheduler {
    link: Scope<GameView>,
}

impl GlooScheduler {
    fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

fn to_millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

impl game::Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn schedule_once(&mut self, delay: Duration, event: game::TimerEvent) -> Self::Handle {
        let link = self.link.clone();
        let timeout = Timeout::new(to_millis(delay), move || {
            link.send_message(Msg::Timer(event));
        });
        TimerHandle::Once { _timeout: timeout }
    }

    fn schedule_every(&mut self, period: Duration, event: game::TimerEvent) -> Self::Handle {
        let link = self.link.clone();
        let interval = Interval::new(to_millis(period), move || {
            link.send_message(Msg::Timer(event));
        });
        TimerHandle::Every {
            _interval: interval,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::CardId),
    Timer(game::TimerEvent),
    NewGame,
    NewTimedGame(game::Seconds),
    NewUntimedGame,
}

const fn state_class(state: game::EngineState) -> &'static str {
    use game::EngineState::*;
    match state {
        Ready => "not-started",
        Active => "in-progress",
        Completed => "win",
        Failed => "lose",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: game::CardView,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardButton)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        card,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        card.is_flipped.then_some("flipped"),
        card.is_matched.then_some("matched"),
        locked.then_some("locked"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", card.id);
        callback.emit(card.id);
    });

    let face = if card.is_flipped {
        card.symbol.to_string()
    } else {
        String::new()
    };

    html! {
        <button {class} {onclick} disabled={locked}>{face}</button>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Forced seed, a random one is drawn per game otherwise
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or(game::GameConfig::timed(game::DEFAULT_TIME_LIMIT))]
    pub config: game::GameConfig,
}

pub(crate) struct GameView {
    session: game::Session<GlooScheduler>,
    forced_seed: Option<u64>,
}

impl GameView {
    fn reseed(&mut self) {
        if self.forced_seed.is_none() {
            self.session.set_seed(js_random_seed());
        }
    }

    fn view_banner(&self, ctx: &Context<Self>, view: &game::SessionView) -> Html {
        if view.is_completed {
            let onclick = ctx.link().callback(|_| Msg::NewGame);
            html! {
                <dialog class="win" open={true}>
                    <h2>{"All pairs found"}</h2>
                    <p>{format!("{} pairs in {} moves", view.total_pairs, view.moves)}</p>
                    <button {onclick}>{"Play again"}</button>
                </dialog>
            }
        } else if view.has_failed {
            let onclick = ctx.link().callback(|_| Msg::NewGame);
            html! {
                <dialog class="lose" open={true}>
                    <h2>{"Time is up"}</h2>
                    <p>
                        {format!(
                            "Found {} of {} pairs in {} moves",
                            view.matched_pairs, view.total_pairs, view.moves
                        )}
                    </p>
                    <button {onclick}>{"Try again"}</button>
                </dialog>
            }
        } else {
            html! {}
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, config } = ctx.props().clone();
        let scheduler = GlooScheduler::new(ctx.link().clone());
        Self {
            session: game::Session::new(config, scheduler, seed.unwrap_or_else(js_random_seed)),
            forced_seed: seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(id) => {
                log::debug!("reveal card: {}", id);
                self.session.reveal_card(id)
            }
            Timer(event) => self.session.handle(event),
            NewGame => {
                self.reseed();
                self.session.new_game(None);
                true
            }
            NewTimedGame(limit) => {
                self.reseed();
                self.session.new_game(Some(limit));
                true
            }
            NewUntimedGame => {
                self.reseed();
                self.session.new_game_untimed();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let view = self.session.view();
        let board_locked = view.state.is_finished() || self.session.engine().is_checking();
        let columns = grid_columns(view.cards.len());
        let callback = ctx.link().callback(Reveal);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_timed = ctx
            .link()
            .callback(|_| NewTimedGame(game::DEFAULT_TIME_LIMIT));
        let cb_untimed = ctx.link().callback(|_| NewUntimedGame);

        html! {
            <div class="pexeso">
                <nav>
                    <aside>{format!("Moves: {}", view.moves)}</aside>
                    <span><button class={classes!("new-game", state_class(view.state))} onclick={cb_new_game}/></span>
                    <aside>{format!("Pairs: {}/{}", view.matched_pairs, view.total_pairs)}</aside>
                    {
                        for view.time_left.map(|left| html! {
                            <aside class="time">{format_time(left)}</aside>
                        })
                    }
                </nav>
                <section class={classes!("board", (!board_locked).then_some("playable"))} style={format!("--columns: {}", columns)}>
                    {
                        for view.cards.iter().map(|&card| {
                            let locked = board_locked || card.is_flipped;
                            html! {
                                <CardButton {card} {locked} callback={callback.clone()}/>
                            }
                        })
                    }
                </section>
                <footer>
                    <button onclick={cb_timed}>{"Timed"}</button>
                    <button onclick={cb_untimed}>{"Relaxed"}</button>
                </footer>
                { self.view_banner(ctx, &view) }
            </div>
        }
    }
}
