//! Second-level lookup behind `GeneralFallback`: a canned-answer table in
//! insertion order (first substring hit wins), then question/sentiment
//! heuristics, then a templated catch-all that echoes the message.

use chrono::{DateTime, Datelike, Utc};

/// Keys are normalized forms; the incoming message is normalized before
/// lookup, so accented spellings hit the same rows.
const CANNED: &[(&str, &str)] = &[
    (
        "como voce funciona",
        "Sou um assistente de IA criado para ajudar com compras online. Uso processamento de linguagem natural para entender suas necessidades e oferecer suporte personalizado.",
    ),
    (
        "quem e voce",
        "Sou seu assistente virtual de e-commerce! Posso ajudar com produtos, carrinho, preços e responder suas dúvidas sobre compras.",
    ),
    (
        "como esta o tempo",
        "Não tenho acesso a informações meteorológicas, mas posso ajudar com suas compras!",
    ),
    (
        "qual seu nome",
        "Sou o Assistente Virtual da Loja! Pode me chamar de IA Shopping.",
    ),
    (
        "voce e humano",
        "Não, sou uma inteligência artificial criada para tornar sua experiência de compra mais fácil e divertida!",
    ),
    (
        "como posso pagar",
        "Aceitamos cartão de crédito, débito, PIX e boleto bancário. O pagamento é processado de forma segura.",
    ),
    (
        "entrega",
        "Fazemos entregas em todo o Brasil! O prazo varia de 1 a 7 dias úteis dependendo da sua localização.",
    ),
    (
        "devolucao",
        "Você tem 30 dias para devolver produtos. Entre em contato conosco para iniciar o processo.",
    ),
    (
        "garantia",
        "Todos os produtos têm garantia do fabricante. Eletrônicos: 1 ano, roupas e calçados: 90 dias.",
    ),
    (
        "desconto",
        "Temos promoções especiais! Cadastre-se na newsletter para receber ofertas exclusivas.",
    ),
    (
        "gratis",
        "Oferecemos trial gratuito de 7 dias em todos os planos. Experimente nossa IA sem compromisso!",
    ),
    (
        "empresa",
        "Somos uma startup brasileira especializada em soluções de IA para empresas de todos os tamanhos.",
    ),
    (
        "seguranca",
        "Levamos segurança a sério: dados criptografados, servidores no Brasil, compliance LGPD.",
    ),
    (
        "integracao",
        "Nossa IA se integra facilmente via API REST. Temos SDKs e documentação completa.",
    ),
    (
        "personalizar",
        "Sim! Nos planos Pro e Enterprise oferecemos treinamento personalizado da IA.",
    ),
    (
        "obrigado",
        "De nada! Fico feliz em ajudar. Há mais alguma coisa que posso fazer por você?",
    ),
    ("tchau", "Até logo! Volte sempre que precisar. Tenha um ótimo dia!"),
    (
        "problema",
        "Sinto muito pelo inconveniente. Pode me contar qual problema está enfrentando? Vou fazer o possível para ajudar.",
    ),
];

const POSITIVE: &[&str] = &["legal", "bom", "gostei", "perfeito", "excelente"];
const NEGATIVE: &[&str] = &["ruim", "pessimo", "horrivel"];

const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

/// Answers a message no routing rule claimed. `original` keeps the user's
/// casing for the echo; `normalized` drives all matching.
pub fn fallback(original: &str, normalized: &str, now: DateTime<Utc>) -> String {
    if normalized.contains("que horas sao") {
        return format!(
            "Agora são {} do dia {}.",
            now.format("%H:%M"),
            now.format("%d/%m/%Y")
        );
    }
    if normalized.contains("que dia e hoje") {
        return format!(
            "Hoje é {}, {}.",
            now.format("%d/%m/%Y"),
            WEEKDAYS[now.weekday().num_days_from_monday() as usize]
        );
    }

    for (keyword, reply) in CANNED {
        if normalized.contains(keyword) {
            return (*reply).to_owned();
        }
    }

    if normalized.contains("por que") || normalized.contains("porque") {
        return "Essa é uma boa pergunta! Como assistente de e-commerce, foco em ajudar com compras. Para questões mais complexas, recomendo consultar fontes especializadas.".to_owned();
    }
    if normalized.contains("como") {
        return "Posso explicar como usar nossa loja: navegue pelos produtos, adicione ao carrinho e finalize a compra. Precisa de ajuda com algo específico?".to_owned();
    }
    if normalized.contains("onde") {
        return "Nossa loja é virtual! Você pode acessar de qualquer lugar. Para entregas, atendemos todo o Brasil.".to_owned();
    }
    if normalized.contains("quando") {
        return "Os prazos variam: entrega de 1-7 dias, atendimento 24h online, promoções semanais. Sobre o que gostaria de saber?".to_owned();
    }

    if POSITIVE.iter().any(|word| normalized.contains(word)) {
        return "Que bom que gostou! Estou aqui para tornar sua experiência ainda melhor. Posso ajudar com mais alguma coisa?".to_owned();
    }
    if NEGATIVE.iter().any(|word| normalized.contains(word)) {
        return "Sinto muito que não esteja satisfeito. Como posso melhorar e ajudar você? Seu feedback é muito importante!".to_owned();
    }

    format!(
        "Interessante pergunta! Como assistente de e-commerce, posso ajudar principalmente com compras, produtos e informações da loja. Sobre '{original}', posso sugerir que você:\n\n• Veja nossos produtos digitando 'produtos'\n• Faça uma busca específica\n• Pergunte sobre entrega, pagamento ou garantia\n\nComo posso ajudar melhor?"
    )
}
