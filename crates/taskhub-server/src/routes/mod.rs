//! Route handlers
//!
//! | Module | Mount | Routes |
//! |--------|-------|--------|
//! | [`auth`] | `/auth` | register, login, logout, me, refresh |
//! | [`user`] | `/` | current user |
//! | [`users`] | `/` | user administration |
//! | [`dashboard`] | `/` | aggregate counts |
//! | [`health`] | `/` | liveness |

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod user;
pub mod users;

use rocket::{Route, routes};

/// Routes mounted under `/auth`
pub fn auth_routes() -> Vec<Route> {
    routes![auth::register, auth::login, auth::logout, auth::me, auth::refresh]
}

/// Routes mounted at `/`
pub fn api_routes() -> Vec<Route> {
    routes![
        user::current_user,
        dashboard::summary,
        users::list,
        users::create,
        users::update,
        users::delete,
        health::health,
    ]
}
