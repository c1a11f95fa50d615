use crate::landing::carousel::Slide;
use crate::landing::faq::Faq;
use crate::landing::mosaic::SLOTS;

pub const INTRODUCTION_TEXT: &str = "Boas Vindas à Nossa Plataforma!";
pub const FOOTER_TEXT: &str = "Envie uma Mensagem para nossa Equipe.";

pub const HERO_VIDEO: &str = "assets/videos/Vard_Campo.mp4";

pub fn video_sources() -> [String; SLOTS] {
    [
        "assets/videos/Vard_Campo.mp4".to_string(),
        "assets/videos/Vard_Video.mp4".to_string(),
        "assets/videos/Bicudos_Video.mp4".to_string(),
    ]
}

pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            background_image: "assets/images/Vard_Card.jpg".to_string(),
            title: "Projeto - V.A.R.D".to_string(),
            description: "O V.A.R.D (Visão Artificial para Reconhecimento e Detecção) é um projeto inovador que combina Inteligência Artificial e Visão Computacional para automatizar a detecção e contagem de pragas agrícolas a partir de armadilhas adesivas. O sistema é especialmente voltado para o monitoramento de pragas de grande impacto econômico, como Tripes e Mosca-branca, auxiliando no controle fitossanitário de cultivos agrícolas. A partir da captura de imagens das armadilhas, algoritmos avançados de IA identificam e contabilizam os insetos presentes, proporcionando dados precisos e em tempo real para a tomada de decisão no campo. Essa abordagem reduz a necessidade de análises manuais, minimiza erros humanos e otimiza o tempo dos produtores e técnicos agrícolas. O projeto foi desenvolvido por um time multidisciplinar de 12 integrantes, reunindo estudantes de diferentes áreas do conhecimento, com orientação dos professores Hannes Fischer, João Ricardo Favan e Renata Coscolin. A colaboração entre áreas como agronomia, ciência de dados e computação permitiu alcançar resultados promissores na automatização do monitoramento de pragas, contribuindo diretamente para a evolução da agricultura de precisão no Brasil.".to_string(),
        },
        Slide {
            background_image: "assets/images/Bicudos_Card.jpg".to_string(),
            title: "Projeto - Bicduos".to_string(),
            description: "O Projeto Bicudo’s é uma iniciativa de caráter experimental e prático, desenvolvida com foco na captura e estudo do bicudo-da-cana-de-açúcar (Sphenophorus levis), uma das pragas mais relevantes para a cultura da cana no Brasil. Com orientação da docente Renata Coscolin, o projeto propõe o desenvolvimento de uma armadilha específica baseada em feromônios, buscando compreender melhor o comportamento, o ciclo biológico e a distribuição espacial dessa praga. A metodologia envolve a elaboração de armadilhas físicas e a aplicação de atrativos químicos (feromônios sintéticos) para promover a captura eficiente dos insetos em campo. A análise dos resultados obtidos contribuirá para estratégias mais eficazes de monitoramento e controle integrado de pragas (MIP), visando reduzir perdas econômicas e minimizar o uso de defensivos. A pesquisa é conduzida por uma equipe diversificada e interdisciplinar, composta por estudantes e pesquisadores de diferentes áreas do conhecimento, unindo esforços entre agronomia, biotecnologia e engenharia. O projeto também oferece uma importante oportunidade de aprendizado prático e científico, reforçando a importância da pesquisa aplicada no contexto do agronegócio sustentável.".to_string(),
        },
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq::closed(
            "Qual a origem dos projetos?",
            "Os projetos têm origem na Fatec Pompeia - Fundação Shunji Nishimura, sendo frutos da iniciativa acadêmica e do compromisso da instituição com a inovação no agronegócio. Desenvolvidos no ambiente educacional da Fatec, os projetos refletem a aplicação prática do conhecimento adquirido em sala de aula. Toda a concepção, desenvolvimento e execução das soluções ocorreram sob a estrutura e orientação oferecidas pela instituição. Dessa forma, os projetos pertencem oficialmente à Fatec Pompeia e são representações diretas de seu potencial formador e tecnológico.",
        ),
        Faq::closed(
            "Como funciona o V.A.R.D?",
            "O V.A.R.D funciona a partir da captação de imagens de armadilhas adesivas utilizadas no monitoramento agrícola, que são processadas por um sistema inteligente baseado em Visão Computacional e Inteligência Artificial. Utilizando ferramentas modernas como Google Colab, TensorFlow, YOLOv8 e APIs da Google Cloud, o sistema identifica e contabiliza automaticamente pragas como Tripes e Mosca-branca. Todo o treinamento do modelo foi realizado com um dataset exclusivo, construído do zero pela equipe ao longo de um ano de coleta, rotulagem e curadoria de imagens reais em campo. Essa base robusta de dados garante alta precisão na detecção e torna o V.A.R.D uma solução eficiente e escalável para aplicações em agricultura de precisão, com potencial para auxiliar técnicos e produtores na tomada de decisão rápida e baseada em dados.",
        ),
        Faq::closed(
            "Como funciona o projeto Bicudo´s?",
            "O projeto Bicudo’s integra o uso de tecnologias modernas com metodologias experimentais voltadas ao estudo do bicudo-da-cana-de-açúcar, uma praga de grande impacto na cultura da cana. A iniciativa conta com testes realizados em laboratórios experimentais e a construção de um viveiro controlado, desenvolvido especialmente para simular condições ideais de reprodução e comportamento da praga. Esse ambiente permite a coleta de dados com maior precisão e frequência, intensificando os padrões de estudo e aumentando a confiabilidade dos resultados. A combinação entre infraestrutura tecnológica, pesquisa aplicada e controle ambiental garante uma base sólida para o desenvolvimento de estratégias mais eficazes de monitoramento e controle biológico, contribuindo diretamente para práticas agrícolas mais sustentáveis.",
        ),
        Faq::closed(
            "Qual o papel do instituto biológico?",
            "O Instituto Biológico atua como parceiro técnico nos projetos, oferecendo suporte científico e validando metodologias utilizadas em campo. Sua participação contribui significativamente para a credibilidade e a eficácia dos resultados. Um dos principais colaboradores é o pesquisador Fernando Salas, reconhecido nacionalmente por sua expertise no controle biológico de pragas. Sua orientação fortalece as estratégias aplicadas e garante embasamento técnico sólido. A presença do Instituto assegura um elo entre pesquisa aplicada e inovação agrícola..",
        ),
    ]
}
