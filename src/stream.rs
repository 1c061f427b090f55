pub(crate) mod controller;
pub mod event;
pub mod observable;
pub mod observer;
pub(crate) mod observer_list;
pub mod rx;
pub mod subscription;
