// ABOUTME: Benchmark suite for the SMS PDU codec
// ABOUTME: Measures septet packing, full-message decoding and SMS-SUBMIT encoding across text sizes

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sms_pdu::datatypes::septet::{pack7, pack7_at, unpack7};
use sms_pdu::{DecodedMessage, SendRequest};
use std::time::Duration;

fn sample_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn create_sample_request(text: &str) -> SendRequest {
    SendRequest::builder()
        .smsc("+12025550100")
        .target("+447700900123")
        .build(text)
        .unwrap()
}

fn create_concat_deliver() -> Vec<u8> {
    let mut pdu = vec![
        0x07, 0x91, 0x21, 0x20, 0x55, 0x05, 0x01, 0xF0, // SMSC
        0x44, // DELIVER, UDH present
        0x0B, 0x91, 0x44, 0x77, 0x00, 0x09, 0x21, 0xF3, // sender
        0x00, 0x00, // protocol id, dcs
        0x21, 0x80, 0x51, 0x41, 0x23, 0x05, 0x80, // timestamp
        160,  // user data length
        0x05, 0x00, 0x03, 0x2A, 0x02, 0x01, // concat header
    ];
    pdu.extend_from_slice(&pack7_at(sample_text(153).as_bytes(), 1));
    pdu
}

fn bench_septets(c: &mut Criterion) {
    let mut group = c.benchmark_group("septets");
    group.measurement_time(Duration::from_secs(5));

    for size in [10, 70, 160] {
        let text = sample_text(size);
        let packed = pack7(text.as_bytes());

        group.bench_with_input(BenchmarkId::new("pack7", size), &text, |b, text| {
            b.iter(|| pack7(black_box(text.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("unpack7", size), &packed, |b, packed| {
            b.iter(|| unpack7(black_box(packed), 0))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(10));

    let submit = create_sample_request("Hello World").encode().unwrap();
    group.bench_function("submit_read_back", |b| {
        b.iter(|| DecodedMessage::decode(black_box(&submit)).unwrap())
    });

    let deliver = create_concat_deliver();
    group.bench_function("deliver_concat", |b| {
        b.iter(|| DecodedMessage::decode(black_box(&deliver)).unwrap())
    });

    // Fail-closed path
    let truncated = &deliver[..20];
    group.bench_function("truncated", |b| {
        b.iter(|| DecodedMessage::decode(black_box(truncated)).is_err())
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.measurement_time(Duration::from_secs(10));

    for size in [10, 160] {
        let request = create_sample_request(&sample_text(size));
        group.bench_with_input(BenchmarkId::new("submit", size), &request, |b, request| {
            b.iter(|| black_box(request.clone()).encode().unwrap())
        });
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let text = sample_text(160);
    c.bench_function("roundtrip_160", |b| {
        b.iter(|| {
            let pdu = create_sample_request(black_box(&text)).encode().unwrap();
            DecodedMessage::decode(&pdu).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_septets,
    bench_decode,
    bench_encode,
    bench_roundtrip
);
criterion_main!(benches);
