use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::errors::MoneyError;

/// An ISO 4217 currency: alphabetic code, numeric code and the number of
/// minor-unit digits (the exponent).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Currency {
    code: &'static str,
    numeric: u16,
    exponent: u8
}

const fn currency(code: &'static str, numeric: u16, exponent: u8) -> Currency {
    Currency { code, numeric, exponent }
}

// Active ISO 4217 codes, sorted by alphabetic code.
static ISO_4217: &[Currency] = &[
    currency("AED", 784, 2), currency("AFN", 971, 2), currency("ALL", 8, 2), currency("AMD", 51, 2),
    currency("ANG", 532, 2), currency("AOA", 973, 2), currency("ARS", 32, 2), currency("AUD", 36, 2),
    currency("AWG", 533, 2), currency("AZN", 944, 2), currency("BAM", 977, 2), currency("BBD", 52, 2),
    currency("BDT", 50, 2), currency("BGN", 975, 2), currency("BHD", 48, 3), currency("BIF", 108, 0),
    currency("BMD", 60, 2), currency("BND", 96, 2), currency("BOB", 68, 2), currency("BRL", 986, 2),
    currency("BSD", 44, 2), currency("BTN", 64, 2), currency("BWP", 72, 2), currency("BYN", 933, 2),
    currency("BZD", 84, 2), currency("CAD", 124, 2), currency("CDF", 976, 2), currency("CHF", 756, 2),
    currency("CLP", 152, 0), currency("CNY", 156, 2), currency("COP", 170, 2), currency("CRC", 188, 2),
    currency("CUP", 192, 2), currency("CVE", 132, 2), currency("CZK", 203, 2), currency("DJF", 262, 0),
    currency("DKK", 208, 2), currency("DOP", 214, 2), currency("DZD", 12, 2), currency("EGP", 818, 2),
    currency("ERN", 232, 2), currency("ETB", 230, 2), currency("EUR", 978, 2), currency("FJD", 242, 2),
    currency("FKP", 238, 2), currency("GBP", 826, 2), currency("GEL", 981, 2), currency("GHS", 936, 2),
    currency("GIP", 292, 2), currency("GMD", 270, 2), currency("GNF", 324, 0), currency("GTQ", 320, 2),
    currency("GYD", 328, 2), currency("HKD", 344, 2), currency("HNL", 340, 2), currency("HTG", 332, 2),
    currency("HUF", 348, 2), currency("IDR", 360, 2), currency("ILS", 376, 2), currency("INR", 356, 2),
    currency("IQD", 368, 3), currency("IRR", 364, 2), currency("ISK", 352, 0), currency("JMD", 388, 2),
    currency("JOD", 400, 3), currency("JPY", 392, 0), currency("KES", 404, 2), currency("KGS", 417, 2),
    currency("KHR", 116, 2), currency("KMF", 174, 0), currency("KPW", 408, 2), currency("KRW", 410, 0),
    currency("KWD", 414, 3), currency("KYD", 136, 2), currency("KZT", 398, 2), currency("LAK", 418, 2),
    currency("LBP", 422, 2), currency("LKR", 144, 2), currency("LRD", 430, 2), currency("LSL", 426, 2),
    currency("LYD", 434, 3), currency("MAD", 504, 2), currency("MDL", 498, 2), currency("MGA", 969, 2),
    currency("MKD", 807, 2), currency("MMK", 104, 2), currency("MNT", 496, 2), currency("MOP", 446, 2),
    currency("MRU", 929, 2), currency("MUR", 480, 2), currency("MVR", 462, 2), currency("MWK", 454, 2),
    currency("MXN", 484, 2), currency("MYR", 458, 2), currency("MZN", 943, 2), currency("NAD", 516, 2),
    currency("NGN", 566, 2), currency("NIO", 558, 2), currency("NOK", 578, 2), currency("NPR", 524, 2),
    currency("NZD", 554, 2), currency("OMR", 512, 3), currency("PAB", 590, 2), currency("PEN", 604, 2),
    currency("PGK", 598, 2), currency("PHP", 608, 2), currency("PKR", 586, 2), currency("PLN", 985, 2),
    currency("PYG", 600, 0), currency("QAR", 634, 2), currency("RON", 946, 2), currency("RSD", 941, 2),
    currency("RUB", 643, 2), currency("RWF", 646, 0), currency("SAR", 682, 2), currency("SBD", 90, 2),
    currency("SCR", 690, 2), currency("SDG", 938, 2), currency("SEK", 752, 2), currency("SGD", 702, 2),
    currency("SHP", 654, 2), currency("SLE", 925, 2), currency("SOS", 706, 2), currency("SRD", 968, 2),
    currency("SSP", 728, 2), currency("STN", 930, 2), currency("SVC", 222, 2), currency("SYP", 760, 2),
    currency("SZL", 748, 2), currency("THB", 764, 2), currency("TJS", 972, 2), currency("TMT", 934, 2),
    currency("TND", 788, 3), currency("TOP", 776, 2), currency("TRY", 949, 2), currency("TTD", 780, 2),
    currency("TWD", 901, 2), currency("TZS", 834, 2), currency("UAH", 980, 2), currency("UGX", 800, 0),
    currency("USD", 840, 2), currency("UYU", 858, 2), currency("UZS", 860, 2), currency("VES", 928, 2),
    currency("VND", 704, 0), currency("VUV", 548, 0), currency("WST", 882, 2), currency("XAF", 950, 0),
    currency("XCD", 951, 2), currency("XOF", 952, 0), currency("XPF", 953, 0), currency("YER", 886, 2),
    currency("ZAR", 710, 2), currency("ZMW", 967, 2), currency("ZWG", 924, 2),
];

impl Currency {
    /// Looks up an active currency by its alphabetic code. The lookup is
    /// case-sensitive, the export always writes upper case codes.
    pub fn from_code(code: &str) -> Option<Currency> {
        ISO_4217.binary_search_by(|candidate| candidate.code.cmp(code))
            .ok()
            .map(|index| ISO_4217[index])
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    /// Number of decimal places between the major and the minor unit.
    pub fn exponent(&self) -> u8 {
        self.exponent
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Currency::from_code(value).ok_or_else(|| MoneyError::UnknownCurrencyCode(value.to_string()))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Currency::from_str(&value).map_err(de::Error::custom)
    }
}
