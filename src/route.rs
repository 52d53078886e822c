#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Question,
    Solution,
}

/// Capability to move the user to another view.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Keeps the current route and where the user has been.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Question)
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        log::info!("navigate {:?} -> {:?}", self.current, route);
        self.history.push(self.current);
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_records_history() {
        let mut router = Router::default();
        router.navigate(Route::Solution);
        assert_eq!(router.current(), Route::Solution);
        assert_eq!(router.history(), &[Route::Question]);
    }
}
