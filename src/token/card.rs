use chrono::{Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// Anything the server reports other than `Waiting` counts as issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RedemptionStatus {
    Waiting,
    Issued,
}

impl<'de> Deserialize<'de> for RedemptionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let status = String::deserialize(deserializer)?;
        Ok(match status.as_str() {
            "Waiting" => RedemptionStatus::Waiting,
            _ => RedemptionStatus::Issued,
        })
    }
}

/// One request to exchange study tokens for a gift code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRequest {
    pub user_id: String,
    #[serde(rename = "token")]
    pub token_count: f64,
    /// Yen per token; may be fractional.
    pub token_rate: f64,
    #[serde(rename = "price")]
    pub price_after_fee: f64,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub status: RedemptionStatus,
    #[serde(
        rename = "amazonGiftCode",
        default,
        deserialize_with = "non_empty_code"
    )]
    pub gift_code: Option<String>,
}

fn non_empty_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    Ok(code.filter(|c| !c.is_empty()))
}

/// Display state for a [`RedemptionRequest`]. The only mutable bit is the
/// one-way reveal flag.
#[derive(Debug, Clone)]
pub struct RedemptionCard {
    request: RedemptionRequest,
    revealed: bool,
}

impl RedemptionCard {
    pub fn new(request: RedemptionRequest) -> Self {
        Self {
            request,
            revealed: false,
        }
    }

    pub fn title(&self) -> String {
        format!("{} トークン交換", self.request.token_count)
    }

    pub fn created_at_text(&self) -> String {
        match Local.timestamp_millis_opt(self.request.created_at).single() {
            Some(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
            None => "-".to_string(),
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self.request.status {
            RedemptionStatus::Waiting => "発行待ち",
            RedemptionStatus::Issued => "発行済み",
        }
    }

    /// `token × rate - fee = price`, shown once the code has been issued.
    pub fn price_line(&self) -> Option<String> {
        if self.request.status == RedemptionStatus::Waiting {
            return None;
        }
        Some(format!(
            "{} × {}円 - 手数料 = {}円",
            self.request.token_count, self.request.token_rate, self.request.price_after_fee
        ))
    }

    pub fn can_reveal(&self) -> bool {
        self.request
            .gift_code
            .as_deref()
            .is_some_and(|c| !c.is_empty())
    }

    pub fn reveal(&mut self) {
        if self.can_reveal() {
            self.revealed = true;
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn visible_gift_code(&self) -> Option<&str> {
        if self.revealed {
            self.request.gift_code.as_deref()
        } else {
            None
        }
    }
}
