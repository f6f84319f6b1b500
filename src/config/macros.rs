//! Macro for writing configurations as literals.

/// Build a [`Config`](crate::config::Config) from a declarative listing.
///
/// State and event names are identifiers; states appear in the order they
/// are listed. Listing a state twice merges its transitions.
///
/// # Example
///
/// ```
/// use fsm_history::fsm_config;
///
/// let config = fsm_config! {
///     initial: Locked,
///     Locked { coin => Unlocked, push => Locked },
///     Unlocked { push => Locked },
///     Broken {},
/// };
///
/// assert_eq!(config.initial(), "Locked");
/// assert_eq!(config.states().len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident
        $(,
            $state:ident {
                $( $event:ident => $target:ident ),* $(,)?
            }
        )* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::OrderedMap::new();
        $(
            let _def = states.get_or_insert_with(
                $crate::core::StateId::from(stringify!($state)),
                $crate::config::StateDef::new,
            );
            $(
                *_def = ::std::mem::take(_def).on(stringify!($event), stringify!($target));
            )*
        )*
        $crate::config::Config::new(stringify!($initial), states)
    }};
}
