use crate::auth::{AuthAction, IdentityProvider};
use crate::event::TimerKind;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick(TimerKind, u64),

    FocusNext,
    FocusPrev,

    SelectTab(AuthAction),
    Submit,
    ProviderSignIn(IdentityProvider),

    Navigate(Route),

    CarouselNext,
    CarouselPrev,
    CarouselJump(usize),

    /// Input was consumed by a component (e.g. typed into a field) and only
    /// needs a redraw.
    Redraw,
}
