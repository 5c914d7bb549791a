//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Pickler for remote exceptions.

use super::{CLASS_KEY, ClassPickler, EXCEPTION_KEY, PickleError, tagged};
use crate::protocol::RemoteException;
use crate::value::{Dict, Value};

const ARGS_KEY: &str = "args";
const ATTRIBUTES_KEY: &str = "attributes";
const TRACEBACK_ATTRIBUTE: &str = "_pyroTraceback";

/// Class name used when an exception dictionary carries no string tag.
const FALLBACK_CLASS: &str = "builtins.Exception";

/// Converts [`RemoteException`] to and from exception-flagged dictionaries.
///
/// Restoring never consults the class tag to pick a native type: every
/// exception dictionary becomes a [`RemoteException`], whatever class it names.
/// [`from_dict`](ClassPickler::from_dict) therefore never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionPickler;

impl ClassPickler for ExceptionPickler {
    type Target = RemoteException;

    fn to_dict(&self, target: &RemoteException) -> Dict {
        let mut dict = tagged(target.class_name());
        dict.insert(EXCEPTION_KEY.to_string(), Value::Bool(true));

        let args = if target.message().is_empty() {
            Vec::new()
        } else {
            vec![Value::from(target.message())]
        };
        dict.insert(ARGS_KEY.to_string(), Value::Tuple(args));

        let mut attributes = target.attributes().clone();
        if let Some(traceback) = target.traceback() {
            attributes.insert(
                TRACEBACK_ATTRIBUTE.to_string(),
                Value::List(vec![Value::from(traceback)]),
            );
        }
        dict.insert(ATTRIBUTES_KEY.to_string(), Value::Dict(attributes));
        dict
    }

    fn from_dict(&self, mut dict: Dict) -> Result<RemoteException, PickleError> {
        let class_name = match dict.shift_remove(CLASS_KEY) {
            Some(Value::Str(name)) => name,
            _ => FALLBACK_CLASS.to_string(),
        };

        let message = match dict.shift_remove(ARGS_KEY).map(Value::into_sequence) {
            Some(Ok(mut args)) if args.len() == 1 => match args.remove(0) {
                Value::Str(message) => message,
                other => other.to_string(),
            },
            Some(Ok(args)) if args.is_empty() => String::new(),
            Some(Ok(args)) => Value::Tuple(args).to_string(),
            Some(Err(Value::Str(message))) => message,
            Some(Err(other)) => other.to_string(),
            None => String::new(),
        };

        let mut attributes = match dict.shift_remove(ATTRIBUTES_KEY) {
            Some(Value::Dict(attributes)) => attributes,
            _ => Dict::new(),
        };
        let traceback = attributes
            .shift_remove(TRACEBACK_ATTRIBUTE)
            .and_then(traceback_text);

        let mut exception = RemoteException::new(class_name, message).with_attributes(attributes);
        if let Some(traceback) = traceback {
            exception = exception.with_traceback(traceback);
        }
        Ok(exception)
    }
}

/// Flattens a traceback sent either as one string or as a list of lines.
fn traceback_text(value: Value) -> Option<String> {
    match value {
        Value::Str(text) => Some(text),
        Value::List(lines) | Value::Tuple(lines) => Some(
            lines
                .iter()
                .map(|line| match line {
                    Value::Str(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dict_layout() {
        let error = RemoteException::new("builtins.ZeroDivisionError", "division by zero");
        let dict = ExceptionPickler.to_dict(&error);
        assert_eq!(dict[CLASS_KEY], Value::from("builtins.ZeroDivisionError"));
        assert_eq!(dict[EXCEPTION_KEY], Value::Bool(true));
        assert_eq!(
            dict[ARGS_KEY],
            Value::Tuple(vec![Value::from("division by zero")])
        );
        assert_eq!(dict[ATTRIBUTES_KEY], Value::Dict(Dict::new()));
    }

    #[test]
    fn test_round_trip_with_traceback() {
        let error = RemoteException::new("app.errors.QuotaExceeded", "quota exceeded")
            .with_attribute("limit", 10)
            .with_traceback("Traceback (most recent call last):\n  File \"x\"\n");
        let restored = ExceptionPickler
            .from_dict(ExceptionPickler.to_dict(&error))
            .unwrap();
        assert_eq!(restored, error);
    }

    #[test]
    fn test_traceback_lines_are_joined() {
        let mut dict = tagged("x.Err");
        let mut attributes = Dict::new();
        attributes.insert(
            TRACEBACK_ATTRIBUTE.into(),
            Value::List(vec![Value::from("line 1\n"), Value::from("line 2\n")]),
        );
        dict.insert(ATTRIBUTES_KEY.into(), Value::Dict(attributes));
        let restored = ExceptionPickler.from_dict(dict).unwrap();
        assert_eq!(restored.traceback(), Some("line 1\nline 2\n"));
        assert!(restored.attributes().is_empty());
    }

    #[test]
    fn test_bare_dict_still_restores() {
        let restored = ExceptionPickler.from_dict(Dict::new()).unwrap();
        assert_eq!(restored.class_name(), FALLBACK_CLASS);
        assert_eq!(restored.message(), "");
    }

    #[test]
    fn test_class_name_is_kept_as_sent() {
        for class_name in ["", " ", "Pyro5.core.URI", "\u{1F4A5}"] {
            let error = RemoteException::new(class_name, "boom");
            let restored = ExceptionPickler
                .from_dict(ExceptionPickler.to_dict(&error))
                .unwrap();
            assert_eq!(restored.class_name(), class_name);
        }

        let mut dict = Dict::new();
        dict.insert(CLASS_KEY.into(), Value::Int(7));
        let restored = ExceptionPickler.from_dict(dict).unwrap();
        assert_eq!(restored.class_name(), FALLBACK_CLASS);
    }

    #[test]
    fn test_non_string_args() {
        let mut dict = tagged("builtins.KeyError");
        dict.insert(ARGS_KEY.into(), Value::Tuple(vec![Value::Int(42)]));
        assert_eq!(ExceptionPickler.from_dict(dict).unwrap().message(), "42");

        let mut dict = tagged("builtins.OSError");
        dict.insert(
            ARGS_KEY.into(),
            Value::Tuple(vec![Value::Int(2), Value::from("No such file")]),
        );
        assert_eq!(
            ExceptionPickler.from_dict(dict).unwrap().message(),
            "(2, 'No such file')"
        );
    }

    #[test]
    fn test_empty_message_round_trip() {
        let error = RemoteException::new("builtins.StopIteration", "");
        let restored = ExceptionPickler
            .from_dict(ExceptionPickler.to_dict(&error))
            .unwrap();
        assert_eq!(restored, error);
    }
}
