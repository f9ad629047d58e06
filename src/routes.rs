/// Screens reachable from the auth view, addressed by a stable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Auth,
    Terms,
    Privacy,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Auth => "/",
            Route::Terms => "/terms",
            Route::Privacy => "/privacy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Auth => "Sign in",
            Route::Terms => "Terms of Service",
            Route::Privacy => "Privacy Policy",
        }
    }
}
