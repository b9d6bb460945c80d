// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Value;

pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for &Value {
	fn into_value(self) -> Value {
		self.clone()
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

macro_rules! impl_into_signed {
	($($t:ty),*) => {
		$(
			impl IntoValue for $t {
				fn into_value(self) -> Value {
					Value::Int8(self as i64)
				}
			}
		)*
	};
}

macro_rules! impl_into_unsigned {
	($($t:ty),*) => {
		$(
			impl IntoValue for $t {
				fn into_value(self) -> Value {
					Value::Uint8(self as u64)
				}
			}
		)*
	};
}

impl_into_signed!(i8, i16, i32, i64, isize);
impl_into_unsigned!(u8, u16, u32, u64, usize);

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::float8(self as f64)
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::float8(self)
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}

impl IntoValue for &String {
	fn into_value(self) -> Value {
		Value::Utf8(self.clone())
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Blob(self)
	}
}

impl IntoValue for &[u8] {
	fn into_value(self) -> Value {
		Value::Blob(self.to_vec())
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(v) => v.into_value(),
			None => Value::Undefined,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integers_keep_sign() {
		assert_eq!(42i32.into_value(), Value::Int8(42));
		assert_eq!((-1i8).into_value(), Value::Int8(-1));
		assert_eq!(42u16.into_value(), Value::Uint8(42));
	}

	#[test]
	fn test_option_none_is_undefined() {
		assert_eq!(None::<i32>.into_value(), Value::Undefined);
		assert_eq!(Some("x").into_value(), Value::Utf8("x".to_string()));
	}
}
