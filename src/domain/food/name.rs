use derive_more::Display;

#[derive(Display, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct FoodName(String);

impl TryFrom<String> for FoodName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("food name is empty".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for FoodName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
