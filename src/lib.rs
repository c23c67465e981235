//! A handful of classic data structures, written from scratch as a learning exercise.
//!
//! # Purpose
//! This crate isn't meant to replace anything in [`std`]. Each structure is written from first
//! principles to understand how it works: growable arrays, a counted multiset, a doubly linked
//! deque and an unbalanced binary search tree. None of them use [`Vec`], everything contiguous is
//! built on [`Array`](collections::contiguous::Array), which owns a boxed slice.
//!
//! # Error Handling
//! Failures are strongly typed. Each kind of failure is its own small struct implementing
//! [`Error`](std::error::Error), and operations that can fail in more than one way return an enum
//! of exactly those kinds. [`CollectionError`](error::CollectionError) unions every kind for
//! callers that would rather use `?` with a single type.
//!
//! Index based operations come in pairs. `try_get` returns a [`Result`] while `get` panics with the
//! same error's message, because being forced to handle an error on every access is tedious when
//! the index is already known to be valid. Operations that are expected to fail in normal use, like
//! dequeuing from an empty [`Deque`](collections::linked::Deque), only have the [`Result`] form.
//!
//! # Features
//! Each family of collections sits behind its own feature: `contiguous`, `bag`, `linked` and
//! `binary_tree`. All of them are enabled by the default `collections-all` feature.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
