//! PDF Generator Memory Cleanup Tests
//!
//! Verifies that `PDFGenerator` properly releases resources after use —
//! important since a long-running conversion service creates and drops one
//! generator per document, without restarting the process in between.
//!
//! Requirements:
//! 1. Memory released after generator finalization
//! 2. No accumulation over many create/use/drop cycles
//! 3. Resources properly freed on abandoned (non-finalized) generators

use pdf_generator::{PDFConfig, PDFGenerator};

fn create_test_config() -> PDFConfig {
    PDFConfig {
        title: Some("Memory Test Document".to_string()),
        subject: Some("Memory leak testing".to_string()),
        creator: Some("pdf-generator memory tests".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_pdf_generator_releases_memory_after_finalization() {
    let config = create_test_config();
    let mut generator = PDFGenerator::new(config).expect("Failed to create PDF generator");

    for i in 0..1000 {
        let y = 700.0 - (i as f64 * 0.5);
        let text = format!("Line {} - This is test content for memory testing", i);
        generator
            .add_text(&text, 100.0, y, 12.0)
            .expect("Failed to add text");
    }

    let pdf_bytes = generator.finalize().expect("Failed to finalize PDF");

    assert!(pdf_bytes.len() > 1000, "PDF should be non-trivial size");
}

#[test]
fn test_no_memory_accumulation_50_cycles() {
    for iteration in 0..50 {
        let config = create_test_config();
        let mut generator = PDFGenerator::new(config)
            .unwrap_or_else(|_| panic!("Failed to create generator on iteration {}", iteration));

        for line in 0..100 {
            let y = 700.0 - (line as f64 * 12.0);
            if y < 50.0 {
                break;
            }

            let text = format!("Iteration {} - document content line {}", iteration, line);
            generator.add_text(&text, 72.0, y, 11.0).unwrap_or_else(|_| {
                panic!("Failed to add text on iteration {}, line {}", iteration, line)
            });
        }

        let pdf_bytes = generator
            .finalize()
            .unwrap_or_else(|_| panic!("Failed to finalize PDF on iteration {}", iteration));

        assert!(
            pdf_bytes.len() > 500,
            "PDF too small on iteration {}: {} bytes",
            iteration,
            pdf_bytes.len()
        );
    }
}

#[test]
fn test_resources_freed_on_abandoned_generator() {
    // Dropping a generator without calling finalize() simulates a cancelled
    // or failed conversion; the async image cache worker pool in particular
    // must not be left dangling.
    for _ in 0..20 {
        let config = create_test_config();
        let mut generator = PDFGenerator::new(config).expect("Failed to create generator");

        let _ = generator.add_text("Test content", 100.0, 700.0, 12.0);
        let _ = generator.add_text("More test content", 100.0, 688.0, 12.0);

        drop(generator);
    }
}

#[test]
fn test_large_pdf_memory_cleanup() {
    let config = create_test_config();
    let mut generator = PDFGenerator::new(config).expect("Failed to create generator");

    for i in 0..500 {
        let y = 700.0 - ((i % 50) as f64 * 12.0);
        let text = format!(
            "Line {} - Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
             sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            i + 1
        );

        let result = generator.add_text(&text, 72.0, y, 11.0);
        if result.is_err() && i > 100 {
            break;
        }
    }

    let pdf_bytes = generator.finalize().expect("Failed to finalize large PDF");

    assert!(
        pdf_bytes.len() > 1_000,
        "Large PDF should be substantial size, got {} bytes",
        pdf_bytes.len()
    );
}

#[test]
fn test_repeated_small_allocations() {
    let config = create_test_config();
    let mut generator = PDFGenerator::new(config).expect("Failed to create generator");

    for i in 0..10_000 {
        let y = 700.0 - ((i % 50) as f64 * 12.0);
        let text = format!("T{}", i);

        let result = generator.add_text(&text, 100.0, y, 10.0);
        if result.is_err() && i > 100 {
            break;
        }
    }

    let pdf_bytes = generator
        .finalize()
        .expect("Failed to finalize after many small additions");

    assert!(pdf_bytes.len() > 100);
}

#[test]
fn test_generator_drop_without_finalize() {
    let config = create_test_config();
    let mut generator = PDFGenerator::new(config).expect("Failed to create generator");

    for i in 0..50 {
        let y = 700.0 - (i as f64 * 10.0);
        generator
            .add_text(&format!("Line {}", i), 100.0, y, 11.0)
            .expect("Failed to add text");
    }

    drop(generator);
}

#[test]
fn test_stress_100_generators() {
    for i in 0..100 {
        let config = create_test_config();
        let mut generator =
            PDFGenerator::new(config).unwrap_or_else(|_| panic!("Failed to create generator {}", i));

        generator
            .add_text("Test", 100.0, 700.0, 12.0)
            .unwrap_or_else(|_| panic!("Failed to add text for generator {}", i));

        let pdf_bytes = generator
            .finalize()
            .unwrap_or_else(|_| panic!("Failed to finalize generator {}", i));

        assert!(!pdf_bytes.is_empty());
    }
}

#[test]
fn test_interleaved_generators() {
    let config1 = create_test_config();
    let config2 = create_test_config();
    let config3 = create_test_config();

    let mut gen1 = PDFGenerator::new(config1).expect("Failed to create gen1");
    let mut gen2 = PDFGenerator::new(config2).expect("Failed to create gen2");
    let mut gen3 = PDFGenerator::new(config3).expect("Failed to create gen3");

    gen1.add_text("Gen1 Line1", 100.0, 700.0, 12.0).expect("gen1 add failed");
    gen2.add_text("Gen2 Line1", 100.0, 700.0, 12.0).expect("gen2 add failed");
    gen1.add_text("Gen1 Line2", 100.0, 688.0, 12.0).expect("gen1 add failed");
    gen3.add_text("Gen3 Line1", 100.0, 700.0, 12.0).expect("gen3 add failed");
    gen2.add_text("Gen2 Line2", 100.0, 688.0, 12.0).expect("gen2 add failed");
    gen3.add_text("Gen3 Line2", 100.0, 688.0, 12.0).expect("gen3 add failed");

    let pdf2 = gen2.finalize().expect("gen2 finalize failed");
    let pdf1 = gen1.finalize().expect("gen1 finalize failed");
    let pdf3 = gen3.finalize().expect("gen3 finalize failed");

    assert!(pdf1.len() > 100);
    assert!(pdf2.len() > 100);
    assert!(pdf3.len() > 100);
}
