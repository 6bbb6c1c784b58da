/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use serde_json::json;
    use untappd_core::{decode_bool, decode_duration, decode_url, Error};
    use untappd_models::{BeerInfo, Envelope};

    /// A trimmed `beer/info` payload exercising all three decoders at once
    fn beer_payload(measure: &str, in_production: i64, label: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "meta": {
                "code": 200,
                "response_time": {"time": 1500, "measure": measure}
            },
            "response": {
                "beer": {
                    "bid": 16630,
                    "beer_name": "Pliny the Elder",
                    "beer_label": label,
                    "beer_abv": 8.0,
                    "beer_style": "IPA - Imperial / Double",
                    "is_in_production": in_production
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_units_scale_to_true_magnitude() {
        let cases = [
            ("milliseconds", 1500.0, TimeDelta::milliseconds(1500)),
            ("seconds", 1500.0, TimeDelta::seconds(1500)),
            ("minutes", 2.0, TimeDelta::seconds(120)),
            ("seconds", 0.25, TimeDelta::milliseconds(250)),
        ];

        for (measure, time, expected) in cases {
            let input = serde_json::to_vec(&json!({"time": time, "measure": measure})).unwrap();
            assert_eq!(decode_duration(&input).unwrap(), expected, "{} {}", time, measure);
        }
    }

    #[test]
    fn test_unknown_unit_is_distinct_from_shape_errors() {
        let err = decode_duration(br#"{"time":5,"measure":"fortnights"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeUnit(_)));

        let err = decode_duration(br#"{"time":"5","measure":"fortnights"}"#).unwrap_err();
        assert!(matches!(err, Error::Serde(_)));
    }

    #[test]
    fn test_bool_validity() {
        assert!(!decode_bool(b"0").unwrap());
        assert!(decode_bool(b"1").unwrap());
        assert!(matches!(decode_bool(b"2"), Err(Error::InvalidBool(2))));
        assert!(matches!(decode_bool(b"-1"), Err(Error::InvalidBool(-1))));
    }

    #[test]
    fn test_url_components_reproduce_input() {
        let url = decode_url(br#""https://example.com/a?b=c""#).unwrap();
        let rebuilt = format!(
            "{}://{}{}?{}",
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path(),
            url.query().unwrap_or_default()
        );
        assert_eq!(rebuilt, "https://example.com/a?b=c");

        let empty = decode_url(br#""""#).unwrap();
        assert_eq!((empty.scheme(), empty.host_str(), empty.path()), ("", None, ""));
    }

    #[test]
    fn test_arrays_are_shape_errors_for_every_decoder() {
        let input = br#"[0, "seconds", "https://example.com"]"#;
        assert!(decode_duration(input).unwrap_err().is_shape());
        assert!(decode_url(input).unwrap_err().is_shape());
        assert!(decode_bool(input).unwrap_err().is_shape());

        // Same length as a duration object, so only the shape can reject it.
        let err = decode_duration(br#"[1, "seconds"]"#).unwrap_err();
        assert!(err.is_shape());
        assert!(err.to_string().contains("expected a duration object"));
    }

    #[test]
    fn test_full_response_decoding() {
        let envelope: Envelope<BeerInfo> =
            serde_json::from_slice(&beer_payload("milliseconds", 1, "")).unwrap();
        assert_eq!(envelope.meta.response_time.unwrap().as_delta(), TimeDelta::milliseconds(1500));

        let beer = envelope.into_result().unwrap().beer;
        assert!(beer.is_active());
        assert_eq!(beer.beer_label.path(), "");
    }

    #[test]
    fn test_full_response_reports_decoder_errors() {
        let err = serde_json::from_slice::<Envelope<BeerInfo>>(&beer_payload("hours", 1, ""))
            .unwrap_err();
        assert!(err.to_string().contains("invalid time unit: \"hours\""));

        let err = serde_json::from_slice::<Envelope<BeerInfo>>(&beer_payload("seconds", 5, ""))
            .unwrap_err();
        assert!(err.to_string().contains("invalid boolean value: 5"));

        let err =
            serde_json::from_slice::<Envelope<BeerInfo>>(&beer_payload("seconds", 1, "http://[::1"))
                .unwrap_err();
        assert!(err.to_string().contains("invalid IPv6 address"));
    }

    #[test]
    fn test_decoders_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<untappd_core::ResponseTime>();
        assert_send_sync::<untappd_core::ResponseUrl>();
        assert_send_sync::<untappd_core::ResponseBool>();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = format!(r#"{{"time": {}, "measure": "seconds"}}"#, i);
                    decode_duration(input.as_bytes()).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), TimeDelta::seconds(i as i64));
        }
    }
}
