use phf::{Map, phf_map};

pub(crate) struct BuiltinColor {
    pub name: &'static str,
    pub rgb: [f64; 3],
}

/// Named colors of the graphics engine, keyed by color index.
pub(crate) static BUILTIN_COLORS: Map<i32, BuiltinColor> = phf_map! {
    0i32 => BuiltinColor { name: "white", rgb: [1.0, 1.0, 1.0] },
    1i32 => BuiltinColor { name: "black", rgb: [0.0, 0.0, 0.0] },
    2i32 => BuiltinColor { name: "blue", rgb: [0.0, 0.0, 1.0] },
    3i32 => BuiltinColor { name: "green", rgb: [0.0, 1.0, 0.0] },
    4i32 => BuiltinColor { name: "red", rgb: [1.0, 0.0, 0.0] },
    5i32 => BuiltinColor { name: "cyan", rgb: [0.0, 1.0, 1.0] },
    6i32 => BuiltinColor { name: "yellow", rgb: [1.0, 1.0, 0.0] },
    7i32 => BuiltinColor { name: "dash", rgb: [1.0, 1.0, 0.0] },
    8i32 => BuiltinColor { name: "magenta", rgb: [1.0, 0.0, 1.0] },
    9i32 => BuiltinColor { name: "salmon", rgb: [1.0, 0.6000000238418579, 0.6000000238418579] },
    10i32 => BuiltinColor { name: "lime", rgb: [0.5, 1.0, 0.5] },
    11i32 => BuiltinColor { name: "slate", rgb: [0.5, 0.5, 1.0] },
    12i32 => BuiltinColor { name: "hotpink", rgb: [1.0, 0.0, 0.5] },
    13i32 => BuiltinColor { name: "orange", rgb: [1.0, 0.5, 0.0] },
    14i32 => BuiltinColor { name: "chartreuse", rgb: [0.5, 1.0, 0.0] },
    15i32 => BuiltinColor { name: "limegreen", rgb: [0.0, 1.0, 0.5] },
    16i32 => BuiltinColor { name: "purpleblue", rgb: [0.5, 0.0, 1.0] },
    17i32 => BuiltinColor { name: "marine", rgb: [0.0, 0.5, 1.0] },
    18i32 => BuiltinColor { name: "olive", rgb: [0.7699999809265137, 0.699999988079071, 0.0] },
    19i32 => BuiltinColor { name: "purple", rgb: [0.75, 0.0, 0.75] },
    20i32 => BuiltinColor { name: "teal", rgb: [0.0, 0.75, 0.75] },
    21i32 => BuiltinColor { name: "ruby", rgb: [0.6000000238418579, 0.20000000298023224, 0.20000000298023224] },
    22i32 => BuiltinColor { name: "forest", rgb: [0.20000000298023224, 0.6000000238418579, 0.20000000298023224] },
    23i32 => BuiltinColor { name: "deepblue", rgb: [0.25, 0.25, 0.6499999761581421] },
    24i32 => BuiltinColor { name: "grey", rgb: [0.5, 0.5, 0.5] },
    25i32 => BuiltinColor { name: "gray", rgb: [0.5, 0.5, 0.5] },
    26i32 => BuiltinColor { name: "carbon", rgb: [0.20000000298023224, 1.0, 0.20000000298023224] },
    27i32 => BuiltinColor { name: "nitrogen", rgb: [0.20000000298023224, 0.20000000298023224, 1.0] },
    28i32 => BuiltinColor { name: "oxygen", rgb: [1.0, 0.30000001192092896, 0.30000001192092896] },
    29i32 => BuiltinColor { name: "hydrogen", rgb: [0.8999999761581421, 0.8999999761581421, 0.8999999761581421] },
    30i32 => BuiltinColor { name: "brightorange", rgb: [1.0, 0.699999988079071, 0.20000000298023224] },
    31i32 => BuiltinColor { name: "sulfur", rgb: [0.8999999761581421, 0.7749999761581421, 0.25] },
    32i32 => BuiltinColor { name: "tv_red", rgb: [1.0, 0.20000000298023224, 0.20000000298023224] },
    33i32 => BuiltinColor { name: "tv_green", rgb: [0.20000000298023224, 1.0, 0.20000000298023224] },
    34i32 => BuiltinColor { name: "tv_blue", rgb: [0.30000001192092896, 0.30000001192092896, 1.0] },
    35i32 => BuiltinColor { name: "tv_yellow", rgb: [1.0, 1.0, 0.20000000298023224] },
    36i32 => BuiltinColor { name: "yelloworange", rgb: [1.0, 0.8700000047683716, 0.3700000047683716] },
    37i32 => BuiltinColor { name: "tv_orange", rgb: [1.0, 0.550000011920929, 0.15000000596046448] },
    48i32 => BuiltinColor { name: "pink", rgb: [1.0, 0.6499999761581421, 0.8500000238418579] },
    49i32 => BuiltinColor { name: "firebrick", rgb: [0.6980000138282776, 0.12999999523162842, 0.12999999523162842] },
    50i32 => BuiltinColor { name: "chocolate", rgb: [0.5550000071525574, 0.22200000286102295, 0.11100000143051147] },
    51i32 => BuiltinColor { name: "brown", rgb: [0.6499999761581421, 0.3199999928474426, 0.17000000178813934] },
    52i32 => BuiltinColor { name: "wheat", rgb: [0.9900000095367432, 0.8199999928474426, 0.6499999761581421] },
    53i32 => BuiltinColor { name: "violet", rgb: [1.0, 0.5, 1.0] },
    154i32 => BuiltinColor { name: "lightmagenta", rgb: [1.0, 0.20000000298023224, 0.800000011920929] },
    4155i32 => BuiltinColor { name: "density", rgb: [0.10000000149011612, 0.10000000149011612, 0.6000000238418579] },
    5256i32 => BuiltinColor { name: "paleyellow", rgb: [1.0, 1.0, 0.5] },
    5257i32 => BuiltinColor { name: "aquamarine", rgb: [0.5, 1.0, 1.0] },
    5258i32 => BuiltinColor { name: "deepsalmon", rgb: [1.0, 0.5, 0.5] },
    5259i32 => BuiltinColor { name: "palegreen", rgb: [0.6499999761581421, 0.8999999761581421, 0.6499999761581421] },
    5260i32 => BuiltinColor { name: "deepolive", rgb: [0.6000000238418579, 0.6000000238418579, 0.10000000149011612] },
    5261i32 => BuiltinColor { name: "deeppurple", rgb: [0.6000000238418579, 0.10000000149011612, 0.6000000238418579] },
    5262i32 => BuiltinColor { name: "deepteal", rgb: [0.10000000149011612, 0.6000000238418579, 0.6000000238418579] },
    5263i32 => BuiltinColor { name: "lightblue", rgb: [0.75, 0.75, 1.0] },
    5264i32 => BuiltinColor { name: "lightorange", rgb: [1.0, 0.800000011920929, 0.5] },
    5265i32 => BuiltinColor { name: "palecyan", rgb: [0.800000011920929, 1.0, 1.0] },
    5266i32 => BuiltinColor { name: "lightteal", rgb: [0.4000000059604645, 0.699999988079071, 0.699999988079071] },
    5267i32 => BuiltinColor { name: "splitpea", rgb: [0.5199999809265137, 0.75, 0.0] },
    5268i32 => BuiltinColor { name: "raspberry", rgb: [0.699999988079071, 0.30000001192092896, 0.4000000059604645] },
    5269i32 => BuiltinColor { name: "sand", rgb: [0.7200000286102295, 0.550000011920929, 0.30000001192092896] },
    5270i32 => BuiltinColor { name: "smudge", rgb: [0.550000011920929, 0.699999988079071, 0.4000000059604645] },
    5271i32 => BuiltinColor { name: "violetpurple", rgb: [0.550000011920929, 0.25, 0.6000000238418579] },
    5272i32 => BuiltinColor { name: "dirtyviolet", rgb: [0.699999988079071, 0.5, 0.5] },
    5273i32 => BuiltinColor { name: "deepsalmon", rgb: [1.0, 0.41999998688697815, 0.41999998688697815] },
    5274i32 => BuiltinColor { name: "lightpink", rgb: [1.0, 0.75, 0.8700000047683716] },
    5275i32 => BuiltinColor { name: "greencyan", rgb: [0.25, 1.0, 0.75] },
    5276i32 => BuiltinColor { name: "limon", rgb: [0.75, 1.0, 0.25] },
    5277i32 => BuiltinColor { name: "skyblue", rgb: [0.20000000298023224, 0.5, 0.800000011920929] },
    5278i32 => BuiltinColor { name: "bluewhite", rgb: [0.8500000238418579, 0.8500000238418579, 1.0] },
    5279i32 => BuiltinColor { name: "warmpink", rgb: [0.8500000238418579, 0.20000000298023224, 0.5] },
    5280i32 => BuiltinColor { name: "darksalmon", rgb: [0.7300000190734863, 0.550000011920929, 0.5199999809265137] },
    5281i32 => BuiltinColor { name: "helium", rgb: [0.8509804010391235, 1.0, 1.0] },
    5282i32 => BuiltinColor { name: "lithium", rgb: [0.800000011920929, 0.5019607543945312, 1.0] },
    5283i32 => BuiltinColor { name: "beryllium", rgb: [0.7607843279838562, 1.0, 0.0] },
    5284i32 => BuiltinColor { name: "boron", rgb: [1.0, 0.7098039388656616, 0.7098039388656616] },
    5285i32 => BuiltinColor { name: "fluorine", rgb: [0.7019608020782471, 1.0, 1.0] },
    5286i32 => BuiltinColor { name: "neon", rgb: [0.7019608020782471, 0.8901960849761963, 0.9607843160629272] },
    5287i32 => BuiltinColor { name: "sodium", rgb: [0.6705882549285889, 0.3607843220233917, 0.9490196108818054] },
    5288i32 => BuiltinColor { name: "magnesium", rgb: [0.5411764979362488, 1.0, 0.0] },
    5289i32 => BuiltinColor { name: "aluminum", rgb: [0.7490196228027344, 0.6509804129600525, 0.6509804129600525] },
    5290i32 => BuiltinColor { name: "silicon", rgb: [0.9411764740943909, 0.7843137383460999, 0.6274510025978088] },
    5291i32 => BuiltinColor { name: "phosphorus", rgb: [1.0, 0.5019607543945312, 0.0] },
    5292i32 => BuiltinColor { name: "chlorine", rgb: [0.12156862765550613, 0.9411764740943909, 0.12156862765550613] },
    5293i32 => BuiltinColor { name: "argon", rgb: [0.5019607543945312, 0.8196078538894653, 0.8901960849761963] },
    5294i32 => BuiltinColor { name: "potassium", rgb: [0.5607843399047852, 0.2509803771972656, 0.8313725590705872] },
    5295i32 => BuiltinColor { name: "calcium", rgb: [0.239215686917305, 1.0, 0.0] },
    5296i32 => BuiltinColor { name: "scandium", rgb: [0.9019607901573181, 0.9019607901573181, 0.9019607901573181] },
    5297i32 => BuiltinColor { name: "titanium", rgb: [0.7490196228027344, 0.7607843279838562, 0.7803921699523926] },
    5298i32 => BuiltinColor { name: "vanadium", rgb: [0.6509804129600525, 0.6509804129600525, 0.6705882549285889] },
    5299i32 => BuiltinColor { name: "chromium", rgb: [0.5411764979362488, 0.6000000238418579, 0.7803921699523926] },
    5300i32 => BuiltinColor { name: "manganese", rgb: [0.6117647290229797, 0.47843137383461, 0.7803921699523926] },
    5301i32 => BuiltinColor { name: "iron", rgb: [0.8784313797950745, 0.4000000059604645, 0.20000000298023224] },
    5302i32 => BuiltinColor { name: "cobalt", rgb: [0.9411764740943909, 0.5647059082984924, 0.6274510025978088] },
    5303i32 => BuiltinColor { name: "nickel", rgb: [0.3137255012989044, 0.8156862854957581, 0.3137255012989044] },
    5304i32 => BuiltinColor { name: "copper", rgb: [0.7843137383460999, 0.5019607543945312, 0.20000000298023224] },
    5305i32 => BuiltinColor { name: "zinc", rgb: [0.4901960790157318, 0.5019607543945312, 0.6901960968971252] },
    5306i32 => BuiltinColor { name: "gallium", rgb: [0.7607843279838562, 0.5607843399047852, 0.5607843399047852] },
    5307i32 => BuiltinColor { name: "germanium", rgb: [0.4000000059604645, 0.5607843399047852, 0.5607843399047852] },
    5308i32 => BuiltinColor { name: "arsenic", rgb: [0.7411764860153198, 0.5019607543945312, 0.8901960849761963] },
    5309i32 => BuiltinColor { name: "selenium", rgb: [1.0, 0.6313725709915161, 0.0] },
    5310i32 => BuiltinColor { name: "bromine", rgb: [0.6509804129600525, 0.16078431904315948, 0.16078431904315948] },
    5311i32 => BuiltinColor { name: "krypton", rgb: [0.3607843220233917, 0.7215686440467834, 0.8196078538894653] },
    5312i32 => BuiltinColor { name: "rubidium", rgb: [0.43921568989753723, 0.18039216101169586, 0.6901960968971252] },
    5313i32 => BuiltinColor { name: "strontium", rgb: [0.0, 1.0, 0.0] },
    5314i32 => BuiltinColor { name: "yttrium", rgb: [0.5803921818733215, 1.0, 1.0] },
    5315i32 => BuiltinColor { name: "zirconium", rgb: [0.5803921818733215, 0.8784313797950745, 0.8784313797950745] },
    5316i32 => BuiltinColor { name: "niobium", rgb: [0.45098039507865906, 0.7607843279838562, 0.7882353067398071] },
    5317i32 => BuiltinColor { name: "molybdenum", rgb: [0.3294117748737335, 0.7098039388656616, 0.7098039388656616] },
    5318i32 => BuiltinColor { name: "technetium", rgb: [0.23137255012989044, 0.6196078658103943, 0.6196078658103943] },
    5319i32 => BuiltinColor { name: "ruthenium", rgb: [0.1411764770746231, 0.5607843399047852, 0.5607843399047852] },
    5320i32 => BuiltinColor { name: "rhodium", rgb: [0.03921568766236305, 0.4901960790157318, 0.5490196347236633] },
    5321i32 => BuiltinColor { name: "palladium", rgb: [0.0, 0.4117647111415863, 0.5215686559677124] },
    5322i32 => BuiltinColor { name: "silver", rgb: [0.7529411911964417, 0.7529411911964417, 0.7529411911964417] },
    5323i32 => BuiltinColor { name: "cadmium", rgb: [1.0, 0.8509804010391235, 0.5607843399047852] },
    5324i32 => BuiltinColor { name: "indium", rgb: [0.6509804129600525, 0.4588235318660736, 0.45098039507865906] },
    5325i32 => BuiltinColor { name: "tin", rgb: [0.4000000059604645, 0.5019607543945312, 0.5019607543945312] },
    5326i32 => BuiltinColor { name: "antimony", rgb: [0.6196078658103943, 0.38823530077934265, 0.7098039388656616] },
    5327i32 => BuiltinColor { name: "tellurium", rgb: [0.8313725590705872, 0.47843137383461, 0.0] },
    5328i32 => BuiltinColor { name: "iodine", rgb: [0.5803921818733215, 0.0, 0.5803921818733215] },
    5329i32 => BuiltinColor { name: "xenon", rgb: [0.25882354378700256, 0.6196078658103943, 0.6901960968971252] },
    5330i32 => BuiltinColor { name: "cesium", rgb: [0.34117648005485535, 0.09019608050584793, 0.5607843399047852] },
    5331i32 => BuiltinColor { name: "barium", rgb: [0.0, 0.7882353067398071, 0.0] },
    5332i32 => BuiltinColor { name: "lanthanum", rgb: [0.43921568989753723, 0.8313725590705872, 1.0] },
    5333i32 => BuiltinColor { name: "cerium", rgb: [1.0, 1.0, 0.7803921699523926] },
    5334i32 => BuiltinColor { name: "praseodymium", rgb: [0.8509804010391235, 1.0, 0.7803921699523926] },
    5335i32 => BuiltinColor { name: "neodymium", rgb: [0.7803921699523926, 1.0, 0.7803921699523926] },
    5336i32 => BuiltinColor { name: "promethium", rgb: [0.6392157077789307, 1.0, 0.7803921699523926] },
    5337i32 => BuiltinColor { name: "samarium", rgb: [0.5607843399047852, 1.0, 0.7803921699523926] },
    5338i32 => BuiltinColor { name: "europium", rgb: [0.3803921639919281, 1.0, 0.7803921699523926] },
    5339i32 => BuiltinColor { name: "gadolinium", rgb: [0.2705882489681244, 1.0, 0.7803921699523926] },
    5340i32 => BuiltinColor { name: "terbium", rgb: [0.1882352977991104, 1.0, 0.7803921699523926] },
    5341i32 => BuiltinColor { name: "dysprosium", rgb: [0.12156862765550613, 1.0, 0.7803921699523926] },
    5342i32 => BuiltinColor { name: "holmium", rgb: [0.0, 1.0, 0.6117647290229797] },
    5343i32 => BuiltinColor { name: "erbium", rgb: [0.0, 0.9019607901573181, 0.4588235318660736] },
    5344i32 => BuiltinColor { name: "thulium", rgb: [0.0, 0.8313725590705872, 0.32156863808631897] },
    5345i32 => BuiltinColor { name: "ytterbium", rgb: [0.0, 0.7490196228027344, 0.21960784494876862] },
    5346i32 => BuiltinColor { name: "lutetium", rgb: [0.0, 0.6705882549285889, 0.1411764770746231] },
    5347i32 => BuiltinColor { name: "hafnium", rgb: [0.3019607961177826, 0.7607843279838562, 1.0] },
    5348i32 => BuiltinColor { name: "tantalum", rgb: [0.3019607961177826, 0.6509804129600525, 1.0] },
    5349i32 => BuiltinColor { name: "tungsten", rgb: [0.12941177189350128, 0.5803921818733215, 0.8392156958580017] },
    5350i32 => BuiltinColor { name: "rhenium", rgb: [0.14901961386203766, 0.4901960790157318, 0.6705882549285889] },
    5351i32 => BuiltinColor { name: "osmium", rgb: [0.14901961386203766, 0.4000000059604645, 0.5882353186607361] },
    5352i32 => BuiltinColor { name: "iridium", rgb: [0.09019608050584793, 0.3294117748737335, 0.529411792755127] },
    5353i32 => BuiltinColor { name: "platinum", rgb: [0.8156862854957581, 0.8156862854957581, 0.8784313797950745] },
    5354i32 => BuiltinColor { name: "gold", rgb: [1.0, 0.8196078538894653, 0.13725490868091583] },
    5355i32 => BuiltinColor { name: "mercury", rgb: [0.7215686440467834, 0.7215686440467834, 0.8156862854957581] },
    5356i32 => BuiltinColor { name: "thallium", rgb: [0.6509804129600525, 0.3294117748737335, 0.3019607961177826] },
    5357i32 => BuiltinColor { name: "lead", rgb: [0.34117648005485535, 0.3490196168422699, 0.3803921639919281] },
    5358i32 => BuiltinColor { name: "bismuth", rgb: [0.6196078658103943, 0.30980393290519714, 0.7098039388656616] },
    5359i32 => BuiltinColor { name: "polonium", rgb: [0.6705882549285889, 0.3607843220233917, 0.0] },
    5360i32 => BuiltinColor { name: "astatine", rgb: [0.4588235318660736, 0.30980393290519714, 0.2705882489681244] },
    5361i32 => BuiltinColor { name: "radon", rgb: [0.25882354378700256, 0.5098039507865906, 0.5882353186607361] },
    5362i32 => BuiltinColor { name: "francium", rgb: [0.25882354378700256, 0.0, 0.4000000059604645] },
    5363i32 => BuiltinColor { name: "radium", rgb: [0.0, 0.4901960790157318, 0.0] },
    5364i32 => BuiltinColor { name: "actinium", rgb: [0.43921568989753723, 0.6705882549285889, 0.9803921580314636] },
    5365i32 => BuiltinColor { name: "thorium", rgb: [0.0, 0.729411780834198, 1.0] },
    5366i32 => BuiltinColor { name: "protactinium", rgb: [0.0, 0.6313725709915161, 1.0] },
    5367i32 => BuiltinColor { name: "uranium", rgb: [0.0, 0.5607843399047852, 1.0] },
    5368i32 => BuiltinColor { name: "neptunium", rgb: [0.0, 0.5019607543945312, 1.0] },
    5369i32 => BuiltinColor { name: "plutonium", rgb: [0.0, 0.41960784792900085, 1.0] },
    5370i32 => BuiltinColor { name: "americium", rgb: [0.3294117748737335, 0.3607843220233917, 0.9490196108818054] },
    5371i32 => BuiltinColor { name: "curium", rgb: [0.47058823704719543, 0.3607843220233917, 0.8901960849761963] },
    5372i32 => BuiltinColor { name: "berkelium", rgb: [0.5411764979362488, 0.30980393290519714, 0.8901960849761963] },
    5373i32 => BuiltinColor { name: "californium", rgb: [0.6313725709915161, 0.21176470816135406, 0.8313725590705872] },
    5374i32 => BuiltinColor { name: "einsteinium", rgb: [0.7019608020782471, 0.12156862765550613, 0.8313725590705872] },
    5375i32 => BuiltinColor { name: "fermium", rgb: [0.7019608020782471, 0.12156862765550613, 0.729411780834198] },
    5376i32 => BuiltinColor { name: "mendelevium", rgb: [0.7019608020782471, 0.05098039284348488, 0.6509804129600525] },
    5377i32 => BuiltinColor { name: "nobelium", rgb: [0.7411764860153198, 0.05098039284348488, 0.529411792755127] },
    5378i32 => BuiltinColor { name: "lawrencium", rgb: [0.7803921699523926, 0.0, 0.4000000059604645] },
    5379i32 => BuiltinColor { name: "rutherfordium", rgb: [0.800000011920929, 0.0, 0.3490196168422699] },
    5380i32 => BuiltinColor { name: "dubnium", rgb: [0.8196078538894653, 0.0, 0.30980393290519714] },
    5381i32 => BuiltinColor { name: "seaborgium", rgb: [0.8509804010391235, 0.0, 0.2705882489681244] },
    5382i32 => BuiltinColor { name: "bohri", rgb: [0.8784313797950745, 0.0, 0.21960784494876862] },
    5383i32 => BuiltinColor { name: "hassium", rgb: [0.9019607901573181, 0.0, 0.18039216101169586] },
    5384i32 => BuiltinColor { name: "meitnerium", rgb: [0.9215686321258545, 0.0, 0.14901961386203766] },
    5385i32 => BuiltinColor { name: "deuterium", rgb: [0.8999999761581421, 0.8999999761581421, 0.8999999761581421] },
    5386i32 => BuiltinColor { name: "lonepair", rgb: [0.5, 0.5, 0.5] },
    5387i32 => BuiltinColor { name: "pseudoatom", rgb: [0.8999999761581421, 0.8999999761581421, 0.8999999761581421] },
};
