use std::future::Future;

use futures::{executor::block_on, StreamExt};
use futures_time::{stream::interval, time::Duration};
use push_rx::prelude::*;
use tracing_subscriber::EnvFilter;

const SIGN_UP_REQUEST_MILLIS: u64 = 2_000;

struct SignUpViewModel {
    title: Subject<String>,
    user_id: Subject<String>,
    password: Subject<String>,
    confirm_password: Subject<String>,
    agreed: Subject<bool>,
    sign_up_button_tapped: Subject<()>,
    is_indicator_presented: Subject<bool>,
    is_sign_up_enabled: Observable<bool>,
}

impl SignUpViewModel {
    fn new() -> Self {
        let password = Subject::new(String::new());
        let confirm_password = Subject::new(String::new());
        let is_sign_up_enabled =
            Observable::combine_latest(&password, &confirm_password, |password, confirm| {
                !password.is_empty() && password == confirm
            });
        let sign_up_button_tapped = Subject::new(());
        let is_indicator_presented = Subject::new(false);

        let indicator = is_indicator_presented.clone();

        sign_up_button_tapped.subscribe_next(move |_| indicator.push(true));

        password.push(String::new());
        confirm_password.push(String::new());

        Self {
            title: Subject::new(String::new()),
            user_id: Subject::new(String::new()),
            password,
            confirm_password,
            agreed: Subject::new(false),
            sign_up_button_tapped,
            is_indicator_presented,
            is_sign_up_enabled,
        }
    }

    /// Resolves once the pending sign-up request, taking `latency`, is done and the
    /// indicator dismissed.
    fn finish_sign_up(&self, latency: Duration) -> impl Future<Output = usize> {
        let request = interval(latency)
            .take(1)
            .map(|_| false);

        self.is_indicator_presented.feed(request)
    }
}

fn bind(vm: &SignUpViewModel) {
    vm.title
        .subscribe_next(|title| tracing::info!(%title, "title changed"));
    vm.user_id
        .subscribe_next(|user_id| tracing::info!(%user_id, "user id changed"));
    vm.agreed
        .subscribe_next(|agreed| tracing::info!(agreed, "agreement changed"));
    vm.is_sign_up_enabled
        .subscribe_next(|enabled| tracing::info!(enabled, "sign up button enabled"));
    vm.is_indicator_presented
        .subscribe_next(|presented| tracing::info!(presented, "indicator presented"));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let vm = SignUpViewModel::new();

    bind(&vm);

    vm.title.push("Sign up".to_owned());
    vm.user_id.push("alice".to_owned());
    vm.password.push("secret".to_owned());
    vm.confirm_password.push("secre".to_owned());
    vm.confirm_password.push("secret".to_owned());
    vm.agreed.push(true);
    vm.sign_up_button_tapped.push(());

    block_on(vm.finish_sign_up(Duration::from_millis(SIGN_UP_REQUEST_MILLIS)));
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc, time::Instant};

    use futures::executor::block_on;
    use futures_time::time::Duration;
    use push_rx::prelude::*;

    use super::SignUpViewModel;

    #[test]
    fn indicator_is_dismissed_after_request() {
        let vm = SignUpViewModel::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        vm.is_indicator_presented
            .subscribe_next(move |it| sink.borrow_mut().push(it));
        vm.sign_up_button_tapped.push(());

        assert!(vm.is_indicator_presented.last_value());

        let started = Instant::now();
        let count = block_on(vm.finish_sign_up(Duration::from_millis(30)));

        assert!(started.elapsed() >= std::time::Duration::from_millis(30));
        assert_eq!(count, 1);
        assert_eq!(*seen.borrow(), [true, false]);
    }
}
