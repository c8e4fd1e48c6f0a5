use crate::errors::AppError;
use crate::labels::title_case;
use crate::model::{Band, Repeater};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::escape::partial_escape;
use quick_xml::Writer;
use std::io::Write;

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const STYLE_ID: &str = "IDLE";
pub const ICON_HREF: &str = "https://www.repeaterbook.com/images/ham/gmapicon.png";
pub const DOCUMENT_NAME: &str = "WWARA Repeaters";
pub const DOCUMENT_DESCRIPTION: &str = "Western Washington Repeaters.<br>Created with <a href='https://github.com/cmnybo/rptrlist2kml'>rptrlist2kml</a> using the <a href='https://www.wwara.org/'>WWARA</a> database";

#[derive(Clone, Debug, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub description: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Clone, Debug)]
pub struct Folder {
    pub band: Band,
    pub placemarks: Vec<Placemark>,
}

/// The whole output tree: one folder per band, created up front, filled in
/// input order.
#[derive(Clone, Debug)]
pub struct KmlDocument {
    folders: Vec<Folder>,
}

impl Default for KmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl KmlDocument {
    pub fn new() -> Self {
        let folders = Band::ALL
            .iter()
            .map(|&band| Folder { band, placemarks: Vec::new() })
            .collect();
        Self { folders }
    }

    pub fn folder(&self, band: Band) -> &Folder {
        &self.folders[band.index()]
    }

    pub fn add(&mut self, r: &Repeater) {
        self.folders[r.band.index()].placemarks.push(Placemark {
            name: r.row.call.clone(),
            description: describe(r),
            longitude: r.row.longitude,
            latitude: r.row.latitude,
        });
    }

    pub fn write_to<W: Write>(&self, out: W) -> Result<(), AppError> {
        let mut w = Writer::new(out);

        start(&mut w, BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)]))?;
        start(&mut w, BytesStart::new("Document"))?;

        start(&mut w, BytesStart::new("Style").with_attributes([("id", STYLE_ID)]))?;
        start(&mut w, BytesStart::new("IconStyle"))?;
        text_element(&mut w, "scale", "0.6")?;
        start(&mut w, BytesStart::new("Icon"))?;
        text_element(&mut w, "href", ICON_HREF)?;
        end(&mut w, "Icon")?;
        end(&mut w, "IconStyle")?;
        start(&mut w, BytesStart::new("LabelStyle"))?;
        text_element(&mut w, "color", "ff00ff00")?;
        text_element(&mut w, "scale", "0.7")?;
        end(&mut w, "LabelStyle")?;
        end(&mut w, "Style")?;

        text_element(&mut w, "name", DOCUMENT_NAME)?;
        text_element(&mut w, "description", DOCUMENT_DESCRIPTION)?;

        for folder in &self.folders {
            start(&mut w, BytesStart::new("Folder"))?;
            text_element(&mut w, "name", folder.band.folder_name())?;
            for pm in &folder.placemarks {
                write_placemark(&mut w, pm)?;
            }
            end(&mut w, "Folder")?;
        }

        end(&mut w, "Document")?;
        end(&mut w, "kml")?;
        Ok(())
    }
}

/// HTML balloon text shown for a repeater.
pub fn describe(r: &Repeater) -> String {
    let row = &r.row;
    let mut d = format!(
        "<b>{:.4}{} {}</b><br>",
        row.freq_out,
        r.sign.label(),
        r.code_label
    );
    d.push_str(&format!(
        "{} - {}<br>",
        title_case(&row.city),
        title_case(&row.coverage_area)
    ));
    d.push_str(&format!("Modes: {}<br>", r.mode_label));
    d.push_str(&format!("Offset: {:.2} MHz<br>", r.offset_khz as f64 / 1000.0));
    match &row.url {
        Some(url) => d.push_str(&format!("Sponsor: <a href={}>{}</a>", url, row.sponsor)),
        None => d.push_str(&format!("Sponsor: {}", row.sponsor)),
    }
    d
}

fn write_placemark<W: Write>(w: &mut Writer<W>, pm: &Placemark) -> Result<(), AppError> {
    start(w, BytesStart::new("Placemark"))?;
    text_element(w, "name", &pm.name)?;
    text_element(w, "styleUrl", STYLE_ID)?;
    text_element(w, "description", &pm.description)?;
    start(w, BytesStart::new("Point"))?;
    let coords = format!("{:.6}, {:.6}, 0", pm.longitude, pm.latitude);
    text_element(w, "coordinates", &coords)?;
    end(w, "Point")?;
    end(w, "Placemark")
}

fn xml_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Xml(format!("{}", e))
}

fn start<W: Write>(w: &mut Writer<W>, tag: BytesStart<'_>) -> Result<(), AppError> {
    w.write_event(Event::Start(tag)).map_err(xml_err)
}

fn end<W: Write>(w: &mut Writer<W>, tag: &str) -> Result<(), AppError> {
    w.write_event(Event::End(BytesEnd::new(tag))).map_err(xml_err)
}

// Only &, < and > are escaped in text content.
fn text_element<W: Write>(w: &mut Writer<W>, tag: &str, text: &str) -> Result<(), AppError> {
    if text.is_empty() {
        return w.write_event(Event::Empty(BytesStart::new(tag))).map_err(xml_err);
    }
    start(w, BytesStart::new(tag))?;
    w.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
        .map_err(xml_err)?;
    end(w, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessCodes, ModeFlags, OffsetSign, RepeaterRow};

    fn repeater(call: &str, band: Band) -> Repeater {
        Repeater {
            row: RepeaterRow {
                line: 3,
                call: call.into(),
                sponsor: "Example ARC".into(),
                url: None,
                city: "SEATTLE".into(),
                coverage_area: "KING COUNTY".into(),
                latitude: 47.6062,
                longitude: -122.3321,
                freq_out: 146.82,
                freq_in: 146.22,
                codes: AccessCodes::default(),
                modes: ModeFlags::default(),
            },
            mode_label: "NFM".into(),
            code_label: "100.0".into(),
            offset_khz: -600,
            sign: OffsetSign::Minus,
            band,
        }
    }

    fn render(doc: &KmlDocument) -> String {
        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn description_lines() {
        let d = describe(&repeater("W7ABC", Band::TwoMeter));
        assert_eq!(
            d,
            "<b>146.8200- 100.0</b><br>Seattle - King County<br>Modes: NFM<br>Offset: -0.60 MHz<br>Sponsor: Example ARC"
        );
    }

    #[test]
    fn sponsor_links_when_url_present() {
        let mut r = repeater("W7ABC", Band::TwoMeter);
        r.row.url = Some("https://example.org".into());
        assert!(describe(&r).ends_with("Sponsor: <a href=https://example.org>Example ARC</a>"));
    }

    #[test]
    fn empty_document_has_seven_named_folders() {
        let xml = render(&KmlDocument::new());
        assert!(xml.starts_with("<kml xmlns=\"http://www.opengis.net/kml/2.2\"><Document><Style id=\"IDLE\">"));
        assert!(xml.contains("<IconStyle><scale>0.6</scale><Icon><href>https://www.repeaterbook.com/images/ham/gmapicon.png</href></Icon></IconStyle>"));
        assert!(xml.contains("<LabelStyle><color>ff00ff00</color><scale>0.7</scale></LabelStyle>"));
        assert!(xml.contains("<name>WWARA Repeaters</name>"));
        assert!(xml.contains("<description>Western Washington Repeaters.&lt;br&gt;Created with"));
        let mut last = 0;
        for band in Band::ALL {
            let tag = format!("<Folder><name>{}</name></Folder>", band.folder_name());
            let pos = xml.find(&tag).unwrap_or_else(|| panic!("missing {tag}"));
            assert!(pos >= last);
            last = pos;
        }
        assert!(xml.ends_with("</Document></kml>"));
        assert!(!xml.contains("Placemark"));
    }

    #[test]
    fn placemarks_land_in_their_band_in_input_order() {
        let mut doc = KmlDocument::new();
        doc.add(&repeater("K7AAA", Band::SeventyCm));
        doc.add(&repeater("K7BBB", Band::TwoMeter));
        doc.add(&repeater("K7CCC", Band::SeventyCm));

        let names: Vec<_> = doc
            .folder(Band::SeventyCm)
            .placemarks
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["K7AAA", "K7CCC"]);
        assert_eq!(doc.folder(Band::TwoMeter).placemarks.len(), 1);

        let xml = render(&doc);
        let two_m = xml.find("2M Repeaters").unwrap();
        let seventy = xml.find("70CM Repeaters").unwrap();
        let bbb = xml.find("K7BBB").unwrap();
        let aaa = xml.find("K7AAA").unwrap();
        let ccc = xml.find("K7CCC").unwrap();
        assert!(two_m < bbb && bbb < seventy && seventy < aaa && aaa < ccc);
    }

    #[test]
    fn placemark_markup() {
        let mut doc = KmlDocument::new();
        doc.add(&repeater("W7ABC", Band::TwoMeter));
        let xml = render(&doc);
        assert!(xml.contains(
            "<Placemark><name>W7ABC</name><styleUrl>IDLE</styleUrl><description>&lt;b&gt;146.8200- 100.0&lt;/b&gt;"
        ));
        assert!(xml.contains("<Point><coordinates>-122.332100, 47.606200, 0</coordinates></Point></Placemark>"));
    }

    #[test]
    fn empty_text_is_self_closing() {
        let mut r = repeater("", Band::TenMeter);
        r.row.call.clear();
        let mut doc = KmlDocument::new();
        doc.add(&r);
        assert!(render(&doc).contains("<Placemark><name/>"));
    }

    #[test]
    fn quotes_in_text_are_left_alone() {
        let mut r = repeater("W7ABC", Band::TwoMeter);
        r.row.sponsor = "Bob's \"Club\" & Co".into();
        let mut doc = KmlDocument::new();
        doc.add(&r);
        assert!(render(&doc).contains("Sponsor: Bob's \"Club\" &amp; Co</description>"));
    }
}
