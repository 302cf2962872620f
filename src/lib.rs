//! # Pixel & Co
//!
//! The marketing site of Pixel & Co, a fictitious design studio, rendered to
//! static HTML. Four routed pages (Home, About, Services, Contact) are
//! composed from shared components (navigation bar, footer, hero, work
//! gallery, marquee) and carry scroll- and route-triggered entrances.
//!
//! # Architecture: Headless Shell
//!
//! The interactive parts of the site are modeled as plain Rust state owned by
//! a [`shell::Shell`]:
//!
//! ```text
//!                 ┌──────────── Shell ─────────────┐
//!  navigate(path) │ Location ──▶ NavigationBar      │
//!  ──────────────▶│    │     ──▶ ScrollRestorer ──▶ Viewport
//!                 │    │     ──▶ RevealTracker      │
//!                 │    └────▶ pages::render         │──▶ Markup
//!                 └─────────────────────────────────┘
//! ```
//!
//! The same shell drives all three outputs: `build` writes each route to a
//! file, `serve` answers HTTP requests from memory, and the tests assert on
//! state transitions directly. The browser mirrors the shell's state
//! machines with a small embedded script reading `data-*` attributes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`route`] | The closed route set, exact path matching, [`route::Location`] |
//! | [`content`] | Compiled-in copy: work items, services, DNA traits, form fields |
//! | [`reveal`] | Entrance descriptions and the one-shot reveal state machine |
//! | [`scroll`] | [`scroll::Viewport`] seam and scroll reset on navigation |
//! | [`nav`] | Navigation bar rendering and the mobile menu state machine |
//! | [`components`] | Footer, hero, work gallery, marquee, icons |
//! | [`pages`] | Page bodies per route, including not-found |
//! | [`layout`] | Document skeleton with inlined CSS and script |
//! | [`shell`] | Owns the location and composes nav + page + footer |
//! | [`generate`] | Renders every route and writes the build directory |
//! | [`cache`] | Content-addressed write cache for incremental builds |
//! | [`serve`] | In-memory preview server |
//! | [`config`] | `site.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | tracing subscriber setup |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship.
//!
//! ## Works Without JavaScript
//!
//! Every page is complete as delivered. The embedded script only adds
//! behaviour: the menu toggle, scroll reset and entrance animations. Content
//! hidden ahead of an entrance is hidden only once the script has announced
//! itself, so a visitor without scripting sees everything immediately.
//!
//! ## Explicit Location
//!
//! Nothing reads the current route from a global. The shell passes its
//! [`route::Location`] to each dependant, which keeps link highlighting and
//! scroll reset testable in isolation.

pub mod cache;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod logging;
pub mod nav;
pub mod output;
pub mod pages;
pub mod reveal;
pub mod route;
pub mod scroll;
pub mod serve;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_helpers;
