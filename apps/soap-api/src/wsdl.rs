//! WSDL 1.1 description of the service (document/literal wrapped).

use crate::envelope::SERVICE_NS;
use crate::service::OPERATIONS;
use quick_xml::escape::escape;

/// Request element fields per operation: (name, xsd type, optional).
fn request_fields(operation: &str) -> &'static [(&'static str, &'static str, bool)] {
    match operation {
        "CreateProduct" => &[
            ("name", "xsd:string", false),
            ("quantity_in_stock", "xsd:long", false),
            ("price_per_unit", "xsd:double", false),
        ],
        "UpdateProduct" => &[
            ("product_id", "xsd:long", false),
            ("name", "xsd:string", true),
            ("quantity_in_stock", "xsd:long", true),
            ("price_per_unit", "xsd:double", true),
        ],
        _ => &[("product_id", "xsd:long", false)],
    }
}

fn result_type(operation: &str) -> &'static str {
    match operation {
        "DeleteProduct" => "xsd:string",
        _ => "tns:Product",
    }
}

/// Renders the WSDL with `address` as the service location.
pub fn document(address: &str) -> String {
    let mut elements = String::new();
    let mut messages = String::new();
    let mut port_ops = String::new();
    let mut binding_ops = String::new();

    for op in OPERATIONS {
        elements.push_str(&format!(r#"
      <xsd:element name="{op}">
        <xsd:complexType>
          <xsd:sequence>"#));
        for (field, ty, optional) in request_fields(op) {
            if *optional {
                elements.push_str(&format!(
                    r#"
            <xsd:element name="{field}" type="{ty}" minOccurs="0" nillable="true"/>"#
                ));
            } else {
                elements.push_str(&format!(
                    r#"
            <xsd:element name="{field}" type="{ty}"/>"#
                ));
            }
        }
        elements.push_str(&format!(
            r#"
          </xsd:sequence>
        </xsd:complexType>
      </xsd:element>
      <xsd:element name="{op}Response">
        <xsd:complexType>
          <xsd:sequence>
            <xsd:element name="{op}Result" type="{result}"/>
          </xsd:sequence>
        </xsd:complexType>
      </xsd:element>"#,
            result = result_type(op)
        ));

        messages.push_str(&format!(
            r#"
  <wsdl:message name="{op}Request">
    <wsdl:part name="parameters" element="tns:{op}"/>
  </wsdl:message>
  <wsdl:message name="{op}Response">
    <wsdl:part name="parameters" element="tns:{op}Response"/>
  </wsdl:message>"#
        ));

        port_ops.push_str(&format!(
            r#"
    <wsdl:operation name="{op}">
      <wsdl:input message="tns:{op}Request"/>
      <wsdl:output message="tns:{op}Response"/>
    </wsdl:operation>"#
        ));

        binding_ops.push_str(&format!(
            r#"
    <wsdl:operation name="{op}">
      <soap:operation soapAction="{ns}#{op}" style="document"/>
      <wsdl:input><soap:body use="literal"/></wsdl:input>
      <wsdl:output><soap:body use="literal"/></wsdl:output>
    </wsdl:operation>"#,
            ns = SERVICE_NS
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wsdl:definitions name="InventoryService"
    targetNamespace="{ns}"
    xmlns:tns="{ns}"
    xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <wsdl:types>
    <xsd:schema targetNamespace="{ns}" elementFormDefault="qualified">
      <xsd:complexType name="Product">
        <xsd:sequence>
          <xsd:element name="id" type="xsd:long"/>
          <xsd:element name="name" type="xsd:string"/>
          <xsd:element name="quantity_in_stock" type="xsd:long"/>
          <xsd:element name="price_per_unit" type="xsd:double"/>
        </xsd:sequence>
      </xsd:complexType>{elements}
    </xsd:schema>
  </wsdl:types>{messages}
  <wsdl:portType name="InventoryServicePortType">{port_ops}
  </wsdl:portType>
  <wsdl:binding name="InventoryServiceBinding" type="tns:InventoryServicePortType">
    <soap:binding style="document" transport="http://schemas.xmlsoap.org/soap/http"/>{binding_ops}
  </wsdl:binding>
  <wsdl:service name="InventoryService">
    <wsdl:port name="InventoryServicePort" binding="tns:InventoryServiceBinding">
      <soap:address location="{address}"/>
    </wsdl:port>
  </wsdl:service>
</wsdl:definitions>
"#,
        ns = SERVICE_NS,
        address = escape(address)
    )
}
