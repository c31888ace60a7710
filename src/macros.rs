macro_rules! wrap_base64_value {
    ($name:ident) => {
        impl $name {
            /// 获取 Base64 字符串
            #[inline]
            pub fn as_str(&self) -> &str {
                self.inner.as_str()
            }

            /// 转换为 Base64 字符串
            #[inline]
            pub fn into_string(self) -> String {
                self.inner.into_string()
            }

            #[inline]
            fn from_verified<S: Into<SmallString<[u8; 64]>>>(text: S) -> Self {
                Self { inner: text.into() }
            }
        }

        impl Hash for $name {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state)
            }
        }

        impl PartialEq<str> for $name {
            #[inline]
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            #[inline]
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self.as_str(), f)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.as_str().as_bytes()
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(value: $name) -> Self {
                value.into_string()
            }
        }

        impl FromStr for $name {
            type Err = InvalidInputError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidInputError;

            #[inline]
            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::from_string(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidInputError;

            #[inline]
            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = InvalidInputError;

            #[inline]
            fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
                Self::from_bytes(data)
            }
        }

        impl TryFrom<Vec<u8>> for $name {
            type Error = InvalidInputError;

            #[inline]
            fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
                Self::from_bytes(&data)
            }
        }

        impl Serialize for $name {
            #[inline]
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            #[inline]
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct ValueVisitor;

                impl Visitor<'_> for ValueVisitor {
                    type Value = $name;

                    #[inline]
                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str(concat!("a string for ", stringify!($name)))
                    }

                    #[inline]
                    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                        $name::from_string(v)
                            .map_err(|_| E::custom(format!("Invalid raw value: {}", v)))
                    }
                }

                deserializer.deserialize_str(ValueVisitor)
            }
        }
    };
}
