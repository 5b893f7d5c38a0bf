// ============================================================================
// NFe Signing Example
// ============================================================================

use fiscal_engine::prelude::*;

const KEY_PEM: &str = include_str!("../benches/fixtures/test_key.pem");
const CERT_PEM: &str = include_str!("../benches/fixtures/test_cert.pem");

fn main() {
    println!("=== NFe Signing Example ===\n");

    let unsigned = r#"<?xml version="1.0" encoding="UTF-8"?>
<NFe xmlns="http://www.portalfiscal.inf.br/nfe">
  <infNFe Id="NFe35240812345678000195550010000000011000000010" versao="4.00">
    <ide><cUF>35</cUF><natOp>VENDA DE MERCADORIA</natOp></ide>
    <total><vNF>372.50</vNF></total>
  </infNFe>
</NFe>"#;

    // Inspect the certificate before signing
    let info = load_certificate(KEY_PEM, CERT_PEM).expect("certificate fixtures are valid");
    println!("Subject:    {}", info.subject);
    println!("Issuer:     {}", info.issuer);
    println!("Serial:     {}", info.serial_number);
    println!("Valid:      {} .. {}", info.not_before, info.not_after);
    println!("Thumbprint: {}\n", info.thumbprint);

    // Sign with the default infNFe configuration
    let signed = sign_xml(unsigned, KEY_PEM, CERT_PEM).expect("signing succeeds");
    println!("Signed document ({} bytes):\n{signed}\n", signed.len());

    // Structural validation, as document intake would run it
    match validate_signature(&signed) {
        Ok(()) => println!("Signature structure: OK"),
        Err(e) => println!("Signature structure: {e}"),
    }

    // A CTe-style document derives its parent tag by convention
    let cte = r#"<Cte><infCte Id="Cte1"><ide/></infCte></Cte>"#;
    let signed_cte = sign_xml_with(cte, KEY_PEM, CERT_PEM, &SignerConfig::for_tag("infCte"))
        .expect("signing succeeds");
    println!("\nCTe signed: {}", validate_signature(&signed_cte).is_ok());
}
