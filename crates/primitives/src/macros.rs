/// Implements the shared surface of a fixed-size byte buffer newtype.
///
/// Expects `fmt`, `FromStr`, `ParseError`, `Serialize`, `Deserialize`,
/// `Serializer` and `Deserializer` to be in scope at the call site.
macro_rules! impl_buf {
    ($name:ident, $len:expr) => {
        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(data: [u8; $len]) -> Self {
                Self(data)
            }

            pub const fn zero() -> Self {
                Self([0; $len])
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(data: [u8; $len]) -> Self {
                Self(data)
            }
        }

        impl<'a> From<&'a [u8; $len]> for $name {
            fn from(data: &'a [u8; $len]) -> Self {
                Self(*data)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let bytes = hex::decode(s).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
                let data: [u8; $len] =
                    bytes
                        .as_slice()
                        .try_into()
                        .map_err(|_| ParseError::InvalidLength {
                            expected: $len,
                            got: bytes.len(),
                        })?;
                Ok(Self(data))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
