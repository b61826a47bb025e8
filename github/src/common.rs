use serde::{de, ser, Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn as_chrono(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime(datetime)
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_rfc3339())
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

// DateTime's from Github can either be in unix epoch time or a string format
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DateTime(
                    v.parse().map_err(|e| E::custom(format!("{}", e)))?,
                ))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                use chrono::{offset::LocalResult, TimeZone};

                match chrono::Utc.timestamp_opt(v, 0) {
                    LocalResult::Single(datetime) => Ok(DateTime(datetime)),
                    _ => Err(E::custom(format!("'{}' is not a legal timestamp", v))),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let seconds = i64::try_from(v)
                    .map_err(|_| E::custom(format!("'{}' is not a legal timestamp", v)))?;
                self.visit_i64(seconds)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_u64(DateTimeVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::DateTime;
    use chrono::{TimeZone, Utc};

    #[test]
    fn datetime_from_string_or_epoch() {
        let from_str: DateTime = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        let from_epoch: DateTime = serde_json::from_str("1704067200").unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(from_str.as_chrono(), &expected);
        assert_eq!(from_epoch, from_str);
    }

    #[test]
    fn out_of_range_epoch() {
        let err = serde_json::from_str::<DateTime>(&u64::MAX.to_string()).unwrap_err();
        assert!(err.to_string().contains("not a legal timestamp"));
    }
}
