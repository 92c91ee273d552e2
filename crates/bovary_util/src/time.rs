use chrono::{ DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeZone, Utc };

/// The community runs on UTC-3.
pub const SERVER_UTC_OFFSET_SECONDS: i32 = -3 * 60 * 60;

pub fn server_tz() -> FixedOffset {
	FixedOffset::east_opt(SERVER_UTC_OFFSET_SECONDS)
		.unwrap_or(Utc.fix())
}

pub fn server_now() -> DateTime<FixedOffset> {
	Utc::now().with_timezone(&server_tz())
}

/// Turns a `HH:MM` time and an optional `DD/MM/YYYY` date, both in server time,
/// into a unix timestamp. Without a date, `today` is used.
pub fn parse_local_timestamp(time: &str, date: Option<&str>, today: NaiveDate) -> Option<i64> {
	let [hour, minute] = parse_parts::<2>(time, ':')?;
	let [day, month, year] = match date {
		Some(date) => parse_parts::<3>(date, '/')?,
		None => [today.day(), today.month(), u32::try_from(today.year()).ok()?]
	};

	server_tz()
		.with_ymd_and_hms(i32::try_from(year).ok()?, month, day, hour, minute, 0)
		.single()
		.map(|x| x.timestamp())
}

fn parse_parts<const N: usize>(source: &str, separator: char) -> Option<[u32; N]> {
	let parts: Vec<u32> = source
		.split(separator)
		.map(|x| x.trim().parse().ok())
		.collect::<Option<_>>()?;
	parts.try_into().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
	}

	#[test]
	fn time_with_date() {
		// 2024-05-01 12:30 at UTC-3 is 15:30 UTC
		let expected = Utc.with_ymd_and_hms(2024, 5, 1, 15, 30, 0).unwrap().timestamp();
		assert_eq!(parse_local_timestamp("12:30", Some("01/05/2024"), today()), Some(expected));
	}

	#[test]
	fn time_without_date_uses_today() {
		let expected = Utc.with_ymd_and_hms(2024, 3, 11, 1, 15, 0).unwrap().timestamp();
		assert_eq!(parse_local_timestamp("22:15", None, today()), Some(expected));
	}

	#[test]
	fn rejects_malformed_input() {
		assert_eq!(parse_local_timestamp("1230", None, today()), None);
		assert_eq!(parse_local_timestamp("12:30:00", None, today()), None);
		assert_eq!(parse_local_timestamp("25:00", None, today()), None);
		assert_eq!(parse_local_timestamp("aa:bb", None, today()), None);
		assert_eq!(parse_local_timestamp("12:30", Some("31/02/2024"), today()), None);
		assert_eq!(parse_local_timestamp("12:30", Some("2024-05-01"), today()), None);
	}
}
