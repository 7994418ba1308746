//! 字符串枚举定义宏
//!
//! 数据库中以字符串存储的枚举统一由此生成 `as_str` / `Display` / `FromStr`，
//! 与 JSON 中的取值保持一致。

macro_rules! define_str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        // derive 必须在调用方的 #[ts(...)] 之前
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)*
                    _ => Err(format!("Invalid {}: {}", stringify!($name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    define_str_enum! {
        /// 带 ts 属性的调用方式与实体定义一致
        #[ts(rename = "SessionSlot")]
        pub enum Slot {
            Morning => "MORNING",
            Evening => "EVENING",
        }
    }

    #[test]
    fn test_enum_with_ts_attribute() {
        assert_eq!(Slot::ALL.len(), 2);
        assert_eq!(Slot::Evening.to_string(), "EVENING");
        assert_eq!("MORNING".parse::<Slot>(), Ok(Slot::Morning));
        assert!("NOON".parse::<Slot>().is_err());
        assert_eq!(serde_json::to_string(&Slot::Morning).unwrap(), "\"MORNING\"");
    }
}
