use super::*;

#[test]
fn renders_keyed_quoted_and_positional_args() {
    let f = Filter::new("zoompan")
        .expr("z", "1+0.1*on/125")
        .arg("d", 1)
        .arg("s", "1280x720");
    assert_eq!(f.to_string(), "zoompan=z='1+0.1*on/125':d=1:s=1280x720");

    let pad = Filter::new("pad").pos(1280).pos(720).pos("(ow-iw)/2");
    assert_eq!(pad.to_string(), "pad=1280:720:(ow-iw)/2");

    assert_eq!(Filter::new("setsar").to_string(), "setsar");
}

#[test]
fn values_with_commas_are_quoted() {
    let f = Filter::new("crop").arg("x", "(iw-ow)*min(1,t/5)");
    assert_eq!(f.to_string(), "crop=x='(iw-ow)*min(1,t/5)'");
}

#[test]
fn set_rewrites_only_existing_keys() {
    let mut f = Filter::new("zoompan").arg("d", 1).arg("fps", 25);
    assert!(f.set("d", 125));
    assert!(!f.set("z", "1"));
    assert_eq!(f.get("d"), Some("125"));
    assert_eq!(f.to_string(), "zoompan=d=125:fps=25");
}

#[test]
fn chain_joins_with_commas() {
    let mut chain = FilterChain::new()
        .then(Filter::new("fps").pos(25))
        .then(Filter::new("setsar").pos(1));
    chain.prepend(Filter::new("scale").pos(1280).pos(720));
    assert_eq!(chain.to_string(), "scale=1280:720,fps=25,setsar=1");
    assert_eq!(chain.len(), 3);
    assert!(chain.find("fps").is_some());
    chain.find_mut("fps").unwrap().args[0].value = "30".into();
    assert_eq!(chain.filters()[1].to_string(), "fps=30");
}
