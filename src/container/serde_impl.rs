//! Serde support. A captured failure is written as its message; reading it
//! back yields a message-only [`ExceptionWrapper`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Contains, Try, VoidTry};
use crate::exception::ExceptionWrapper;

#[derive(Serialize)]
#[serde(rename = "Try")]
enum TryRef<'a, T> {
    Empty,
    Value(&'a T),
    Exception(String),
}

#[derive(Deserialize)]
#[serde(rename = "Try")]
enum TryOwned<T> {
    Empty,
    Value(T),
    Exception(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "VoidTry")]
enum VoidRepr {
    Value,
    Exception(String),
}

impl<T: Serialize> Serialize for Try<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.contains {
            Contains::Nothing => TryRef::<T>::Empty,
            Contains::Value(value) => TryRef::Value(value),
            Contains::Exception(e) => TryRef::Exception(e.to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Try<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TryOwned::deserialize(deserializer)? {
            TryOwned::Empty => Try::new(),
            TryOwned::Value(value) => Try::from_value(value),
            TryOwned::Exception(message) => Try::from_exception(ExceptionWrapper::msg(message)),
        })
    }
}

impl Serialize for VoidTry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.exception {
            None => VoidRepr::Value,
            Some(e) => VoidRepr::Exception(e.to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VoidTry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match VoidRepr::deserialize(deserializer)? {
            VoidRepr::Value => VoidTry::new(),
            VoidRepr::Exception(message) => VoidTry::from_exception(ExceptionWrapper::msg(message)),
        })
    }
}
